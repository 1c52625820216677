use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};

use service::company::payload::{CompanyOut, CompanyPayload};
use service::company::{export, import};

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyOut>>, ApiError> {
    let companies = state.repo.list().await?;
    Ok(Json(companies.into_iter().map(CompanyOut::from).collect()))
}

pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CompanyOut>, ApiError> {
    match state.repo.get(id).await? {
        Some(company) => Ok(Json(company.into())),
        None => Err(ApiError::NotFound("company not found".into())),
    }
}

pub async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<CompanyPayload>,
) -> Result<(StatusCode, Json<CompanyOut>), ApiError> {
    let company = state.repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(company.into())))
}

pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CompanyPayload>,
) -> Result<Json<CompanyOut>, ApiError> {
    let company = state.repo.update(id, payload).await?;
    Ok(Json(company.into()))
}

pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if state.repo.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("company not found".into()))
    }
}

/// Stream every record as a one-sheet workbook attachment.
pub async fn download_companies_xlsx(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let companies = state.repo.list().await?;
    let bytes = export::build_workbook(&companies).map_err(ApiError::from)?;
    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static(export::XLSX_CONTENT_TYPE),
        ),
        (
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment; filename=companies.xlsx"),
        ),
    ];
    Ok((headers, bytes))
}

/// Accept a multipart CSV upload and insert every validated row in one
/// transaction. Any parse or row failure rejects the whole file with 400.
pub async fn upload_companies_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadUpload(e.to_string()))?
    {
        if field.file_name().is_none() {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        import::require_csv_filename(&filename).map_err(ApiError::from_upload)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadUpload(e.to_string()))?;
        let rows = import::parse_rows(&data).map_err(ApiError::from_upload)?;
        let created = state.repo.import(rows).await.map_err(ApiError::from)?;
        return Ok((
            StatusCode::CREATED,
            Json(serde_json::json!({ "created": created })),
        ));
    }
    Err(ApiError::BadUpload("multipart file field is required".into()))
}
