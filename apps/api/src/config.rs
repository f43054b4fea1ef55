use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Landing page shipped with the crate, independent of the working directory.
const DEFAULT_INDEX_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html");

/// Application configuration loaded from environment variables.
/// Fails at startup if the model credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    /// Scratch directory for in-flight uploads.
    pub upload_dir: PathBuf,
    /// Holds the single current `resume.html`.
    pub output_dir: PathBuf,
    /// Landing page served at `/`.
    pub index_path: PathBuf,
    pub max_upload_bytes: usize,
    pub llm_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            upload_dir: env_or("UPLOAD_DIR", "uploads").into(),
            output_dir: env_or("OUTPUT_DIR", "output").into(),
            index_path: env_or("INDEX_PATH", DEFAULT_INDEX_PATH).into(),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120)
                .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// Creates the scratch and output directories if they are absent.
    pub async fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.upload_dir, &self.output_dir] {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
        }
        Ok(())
    }

    /// Fails if the landing page served at `/` is missing.
    pub fn check_landing_page(&self) -> Result<()> {
        if self.index_path.is_file() {
            Ok(())
        } else {
            anyhow::bail!(
                "Landing page '{}' not found; set INDEX_PATH to the index.html to serve",
                self.index_path.display()
            )
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => Ok(raw.trim().parse::<T>()?),
        Err(_) => Ok(default),
    }
}
