//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, State},
    response::Html,
};

use crate::errors::AppError;
use crate::resume::ingress::read_upload;
use crate::resume::pipeline;
use crate::state::AppState;

/// POST /upload
///
/// Accepts a multipart form with a `pdf` file field and returns the generated
/// resume as `text/html`. Any failure yields a JSON error object instead.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let upload = read_upload(multipart).await?;
    let html = pipeline::run(&state, upload).await?;
    Ok(Html(html))
}

/// GET /resume
///
/// Returns the most recently generated resume without regenerating it.
pub async fn handle_get_resume(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state
        .store
        .load()
        .await?
        .map(Html)
        .ok_or_else(|| AppError::NotFound("No resume has been generated yet".to_string()))
}
