use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::resume::extractor::ExtractionError;
use crate::resume::generator::GenerationError;
use crate::resume::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{"error": "<message>", "kind": "<kind>"}`; `kind`
/// is the stable value callers should branch on.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload I/O error: {0}")]
    UploadIo(#[from] std::io::Error),

    /// The multipart body could not be read: truncated, malformed, or over the size limit.
    #[error("Upload I/O error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Machine-readable error kind carried in the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::UploadIo(_) | AppError::Multipart(_) => "upload_io",
            AppError::Extraction(_) => "extraction",
            AppError::Generation(_) => "generation",
            AppError::Storage(_) => "storage",
            AppError::NotFound(_) => "not_found",
            AppError::Internal(_) => "internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            // 413 when the body limit was hit, 400 for malformed bodies.
            AppError::Multipart(e) => e.status(),
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UploadIo(_) | AppError::Storage(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::UploadIo(e) => {
                tracing::error!("Upload I/O error: {e}");
                e.to_string()
            }
            AppError::Multipart(e) => {
                tracing::warn!("Malformed upload: {e}");
                format!("Failed to read upload: {e}")
            }
            AppError::Extraction(e) => {
                tracing::warn!("Extraction error: {e}");
                e.to_string()
            }
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                e.to_string()
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                e.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        let body = Json(json!({
            "error": message,
            "kind": self.kind(),
        }));

        (status, body).into_response()
    }
}
