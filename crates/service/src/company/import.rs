use crate::company::payload::CompanyPayload;
use crate::errors::ServiceError;

/// Headers that must be present (after trimming and lower-casing) for an
/// upload to be accepted.
pub const REQUIRED_COLUMNS: [&str; 3] = ["name", "email", "website"];

/// Uploads are gated on the file extension, case-insensitively.
pub fn require_csv_filename(filename: &str) -> Result<(), ServiceError> {
    if !filename.to_lowercase().ends_with(".csv") {
        return Err(ServiceError::BadUpload("please upload a CSV file".into()));
    }
    Ok(())
}

/// Decode the upload as UTF-8 CSV and turn every data row into a validated
/// payload. The first failing row aborts the whole parse, so nothing gets
/// persisted for a file containing any invalid row.
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<CompanyPayload>, ServiceError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| ServiceError::BadUpload("file is not valid UTF-8".into()))?;

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ServiceError::BadUpload(format!("malformed CSV header: {e}")))?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let (Some(name_idx), Some(email_idx), Some(website_idx)) =
        (column("name"), column("email"), column("website"))
    else {
        return Err(ServiceError::BadUpload(
            "CSV must include headers: name,email,website".into(),
        ));
    };

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        // Header occupies line 1; data starts on line 2.
        let line = i + 2;
        let record =
            record.map_err(|e| ServiceError::BadUpload(format!("malformed CSV row {line}: {e}")))?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
        let payload = CompanyPayload {
            name: field(name_idx),
            email: field(email_idx),
            website: field(website_idx),
        };
        payload.validate().map_err(|e| match e {
            ServiceError::Validation(msg) => {
                ServiceError::Validation(format!("row {line}: {msg}"))
            }
            other => other,
        })?;
        rows.push(payload);
    }
    Ok(rows)
}
