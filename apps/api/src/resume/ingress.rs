//! Upload ingress: multipart parsing and the per-request scratch file.

use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncWriteExt};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;

/// Multipart field that carries the profile PDF.
pub const PDF_FIELD: &str = "pdf";
const FALLBACK_FILENAME: &str = "upload.pdf";
const MAX_FILENAME_LEN: usize = 64;

/// The uploaded PDF as received from the client.
#[derive(Debug)]
pub struct UploadedPdf {
    pub filename: String,
    pub data: Bytes,
}

/// Reads the `pdf` field out of a multipart form. Other fields are drained and ignored;
/// a body that fails to parse is an upload error.
pub async fn read_upload(mut multipart: Multipart) -> Result<UploadedPdf, AppError> {
    let mut upload: Option<UploadedPdf> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(PDF_FIELD) {
            let filename = field.file_name().unwrap_or(FALLBACK_FILENAME).to_string();
            let data = field.bytes().await?;
            debug!(filename = %filename, bytes = data.len(), "Received upload");
            upload = Some(UploadedPdf { filename, data });
        } else {
            field.bytes().await?;
        }
    }

    upload.ok_or_else(|| AppError::Validation(format!("Missing multipart field '{PDF_FIELD}'")))
}

/// Reduces a client-supplied filename to a safe single path segment.
///
/// Only the final component survives; anything outside `[A-Za-z0-9._-]` becomes `_`.
pub fn sanitize_filename(name: &str) -> String {
    let last = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = last
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed: String = cleaned
        .trim_start_matches('.')
        .chars()
        .take(MAX_FILENAME_LEN)
        .collect();

    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed
    }
}

/// A request-owned copy of the upload on disk.
///
/// `discard` removes it; if the owning future is dropped first, `Drop` does.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    removed: bool,
}

impl ScratchFile {
    /// Writes `data` to `<dir>/<request_id>-<sanitized filename>`, overwriting any
    /// existing file of that name.
    pub async fn create(
        dir: &Path,
        request_id: Uuid,
        filename: &str,
        data: &[u8],
    ) -> Result<Self, std::io::Error> {
        Self::create_from_reader(dir, request_id, filename, data).await
    }

    /// Streams `reader` into the scratch path. The guard exists before the first
    /// byte is written, so a failed or partial write leaves nothing behind.
    pub async fn create_from_reader<R>(
        dir: &Path,
        request_id: Uuid,
        filename: &str,
        mut reader: R,
    ) -> Result<Self, std::io::Error>
    where
        R: AsyncRead + Unpin,
    {
        let scratch = Self {
            path: dir.join(format!("{request_id}-{}", sanitize_filename(filename))),
            removed: false,
        };

        let mut file = tokio::fs::File::create(&scratch.path).await?;
        tokio::io::copy(&mut reader, &mut file).await?;
        file.flush().await?;

        Ok(scratch)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the scratch file if it still exists.
    pub async fn discard(mut self) {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => debug!(path = %self.path.display(), "Removed scratch upload"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), "Failed to remove scratch upload: {e}"),
        }
        self.removed = true;
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if !self.removed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}
