//! Single-slot storage for the current generated resume.
//!
//! Writes go to a temporary file in the output directory and are renamed onto
//! `resume.html`, so readers only ever see a complete document. Concurrent
//! saves resolve last-write-wins.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub const RESUME_FILE: &str = "resume.html";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("write task failed: {0}")]
    Task(String),
}

#[derive(Debug, Clone)]
pub struct ResumeStore {
    dir: PathBuf,
}

impl ResumeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn resume_path(&self) -> PathBuf {
        self.dir.join(RESUME_FILE)
    }

    /// Replaces the current resume with `html`.
    pub async fn save(&self, html: &str) -> Result<(), StoreError> {
        let dir = self.dir.clone();
        let target = self.resume_path();
        let html = html.to_owned();
        let len = html.len();

        tokio::task::spawn_blocking(move || write_atomically(&dir, &target, html.as_bytes()))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))??;

        info!("Stored resume ({len} bytes) at {}", self.resume_path().display());
        Ok(())
    }

    /// Reads the current resume, `None` if nothing has been generated yet.
    pub async fn load(&self) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(self.resume_path()).await {
            Ok(html) => Ok(Some(html)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

fn write_atomically(dir: &Path, target: &Path, bytes: &[u8]) -> Result<(), std::io::Error> {
    let mut tmp = tempfile::Builder::new()
        .prefix(".resume-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(n: usize) -> String {
        format!(
            "<html><body><h1>Candidate {n}</h1>{}</body></html>",
            "x".repeat(4096)
        )
    }

    #[tokio::test]
    async fn test_load_before_any_save_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResumeStore::new(dir.path());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResumeStore::new(dir.path());
        let doc = "<html><body><h1>Zoë</h1></body></html>";

        store.save(doc).await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some(doc));
    }

    #[tokio::test]
    async fn test_save_overwrites_and_leaves_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResumeStore::new(dir.path());

        store.save(&html(1)).await.unwrap();
        store.save(&html(2)).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(html(2)));
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from(RESUME_FILE)]);
    }

    #[tokio::test]
    async fn test_save_into_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResumeStore::new(dir.path().join("absent"));
        assert!(matches!(
            store.save("<html></html>").await,
            Err(StoreError::Io(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_leave_one_complete_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResumeStore::new(dir.path());

        let mut handles = Vec::new();
        for n in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.save(&html(n)).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stored = store.load().await.unwrap().unwrap();
        assert!((0..16).any(|n| stored == html(n)));
    }
}
