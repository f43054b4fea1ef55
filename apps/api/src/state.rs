use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::resume::extractor::PdfExtractor;
use crate::resume::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable model backend. Default: the Gemini `LlmClient`.
    pub generator: Arc<dyn TextGenerator>,
    /// Pluggable PDF text extractor. Default: `PdfTextExtractor`.
    pub extractor: Arc<dyn PdfExtractor>,
    pub store: ResumeStore,
}
