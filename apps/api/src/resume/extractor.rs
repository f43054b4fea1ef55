//! PDF text extraction.
//!
//! `AppState` holds an `Arc<dyn PdfExtractor>`; `PdfTextExtractor` is the default,
//! backed by `pdf-extract`.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to read PDF: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),
}

#[async_trait]
pub trait PdfExtractor: Send + Sync {
    /// Returns the text of every page, concatenated in page order.
    async fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}

pub struct PdfTextExtractor;

#[async_trait]
impl PdfExtractor for PdfTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = tokio::fs::read(path).await?;

        // pdf-extract is CPU-bound and may panic on malformed input.
        let pages = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| ExtractionError::Pdf(format!("extraction aborted: {e}")))?
        .map_err(ExtractionError::Pdf)?;

        debug!(pages = pages.len(), path = %path.display(), "Extracted PDF text");
        Ok(concat_pages(pages))
    }
}

/// Joins page texts in order with no separator.
pub fn concat_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    pages.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::test_support::build_pdf;

    #[test]
    fn test_concat_pages_preserves_order_without_separator() {
        let pages = vec!["Jane Doe".to_string(), String::new(), "Rust".to_string()];
        assert_eq!(concat_pages(pages), "Jane DoeRust");
    }

    #[tokio::test]
    async fn test_extracts_text_from_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.pdf");
        std::fs::write(&path, build_pdf(&["Experience", "Education"])).unwrap();

        let text = PdfTextExtractor.extract(&path).await.unwrap();

        let experience = text.find("Experience").expect("first page text");
        let education = text.find("Education").expect("second page text");
        assert!(experience < education);
    }

    #[tokio::test]
    async fn test_non_pdf_is_an_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("renamed.pdf");
        std::fs::write(&path, b"just some plain text, not a PDF").unwrap();

        let err = PdfTextExtractor.extract(&path).await.unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PdfTextExtractor
            .extract(&dir.path().join("absent.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Io(_)));
    }
}
