//! Upload → extract → generate → store, for a single request.
//!
//! The scratch copy of the upload is discarded after the stages run, whether
//! they succeeded or not. The stored resume is never cleaned up; the next
//! successful upload replaces it.

use std::path::Path;

use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::generator::generate_resume_html;
use crate::resume::ingress::{ScratchFile, UploadedPdf};
use crate::state::AppState;

/// Runs the full pipeline and returns the HTML that was stored.
#[tracing::instrument(
    skip(state, upload),
    fields(filename = %upload.filename, request_id = tracing::field::Empty)
)]
pub async fn run(state: &AppState, upload: UploadedPdf) -> Result<String, AppError> {
    let request_id = Uuid::new_v4();
    tracing::Span::current().record("request_id", tracing::field::display(request_id));

    let scratch = ScratchFile::create(
        &state.config.upload_dir,
        request_id,
        &upload.filename,
        &upload.data,
    )
    .await?;

    let result = process(state, scratch.path()).await;
    scratch.discard().await;

    if result.is_ok() {
        info!("Resume generated");
    }
    result
}

async fn process(state: &AppState, pdf_path: &Path) -> Result<String, AppError> {
    let text = state.extractor.extract(pdf_path).await?;
    info!("Extracted {} chars of profile text", text.len());

    let html = generate_resume_html(state.generator.as_ref(), &text).await?;
    state.store.save(&html).await?;

    Ok(html)
}
