use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// HTTP-facing error taxonomy. Every variant renders as a JSON body
/// `{"error": msg}` with its mapped status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadUpload(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadUpload(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Mapping for the upload endpoint, where row-level validation failures
    /// surface as 400 rather than 422.
    pub fn from_upload(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) | ServiceError::BadUpload(msg) => {
                ApiError::BadUpload(msg)
            }
            other => ApiError::from(other),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => ApiError::Validation(msg),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::BadUpload(msg) => ApiError::BadUpload(msg),
            ServiceError::Spreadsheet(msg) => ApiError::Internal(msg),
            ServiceError::Model(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %msg, "request failed");
        }
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}
