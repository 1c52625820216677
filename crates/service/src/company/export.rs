use rust_xlsxwriter::{Workbook, XlsxError};

use crate::errors::ServiceError;
use models::company;

pub const XLSX_SHEET: &str = "companies";
pub const XLSX_FILENAME: &str = "companies.xlsx";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn xlsx_err(e: XlsxError) -> ServiceError {
    ServiceError::Spreadsheet(e.to_string())
}

/// Serialize all records into a single-sheet workbook: a header row
/// followed by one row per record in the given order.
pub fn build_workbook(companies: &[company::Model]) -> Result<Vec<u8>, ServiceError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet().set_name(XLSX_SHEET).map_err(xlsx_err)?;

    for (col, header) in ["id", "name", "email", "website"].iter().enumerate() {
        sheet.write_string(0, col as u16, *header).map_err(xlsx_err)?;
    }
    for (i, c) in companies.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_number(row, 0, c.id as f64).map_err(xlsx_err)?;
        sheet.write_string(row, 1, &c.name).map_err(xlsx_err)?;
        sheet.write_string(row, 2, &c.email).map_err(xlsx_err)?;
        sheet.write_string(row, 3, &c.website).map_err(xlsx_err)?;
    }

    workbook.save_to_buffer().map_err(xlsx_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Reader, Xlsx};
    use std::io::Cursor;

    fn model(id: i32, name: &str) -> company::Model {
        company::Model {
            id,
            name: name.into(),
            email: format!("info@{}.test", name.to_lowercase()),
            website: format!("https://{}.test", name.to_lowercase()),
        }
    }

    #[test]
    fn workbook_has_header_and_rows_in_order() {
        let bytes = build_workbook(&[model(1, "Acme"), model(2, "Globex")]).unwrap();

        let mut wb: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = wb.worksheet_range(XLSX_SHEET).unwrap();
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();

        assert_eq!(rows[0], vec!["id", "name", "email", "website"]);
        assert_eq!(
            rows[1],
            vec!["1", "Acme", "info@acme.test", "https://acme.test"]
        );
        assert_eq!(
            rows[2],
            vec!["2", "Globex", "info@globex.test", "https://globex.test"]
        );
    }

    #[test]
    fn empty_store_still_produces_header() {
        let bytes = build_workbook(&[]).unwrap();
        let mut wb: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = wb.worksheet_range(XLSX_SHEET).unwrap();
        assert_eq!(range.rows().count(), 1);
    }
}
