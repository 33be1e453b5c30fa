use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;

const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": <message>}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Empty filename")]
    EmptyFilename,

    #[error("File size exceeds {limit_mb}MB limit")]
    FileTooLarge { limit_mb: usize },

    #[error("Unsupported file format. Only PDF and DOCX files are allowed.")]
    UnsupportedFormat,

    #[error("Error extracting text: {0}")]
    Extraction(String),

    #[error("AI processing error: {0}")]
    AiProcessing(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Endpoint not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The one place error variants map to HTTP status codes.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFile | AppError::EmptyFilename | AppError::UnsupportedFormat => {
                StatusCode::BAD_REQUEST
            }
            AppError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Extraction(_)
            | AppError::AiProcessing(_)
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat => AppError::UnsupportedFormat,
            ExtractError::Failure(msg) => AppError::Extraction(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Extraction(msg) => {
                tracing::error!("Text extraction failed: {msg}");
                self.to_string()
            }
            AppError::AiProcessing(msg) => {
                tracing::error!("LLM error: {msg}");
                self.to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                INTERNAL_SERVER_ERROR.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                INTERNAL_SERVER_ERROR.to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Body used by the panic catcher, which cannot go through `AppError`.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_SERVER_ERROR })),
    )
        .into_response()
}
