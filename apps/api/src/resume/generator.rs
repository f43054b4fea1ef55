//! Resume generation: prompt construction, the model call, and the checks the
//! returned markup must pass before it is stored or served.

use thiserror::Error;
use tracing::info;

use crate::llm_client::{LlmError, TextGenerator};
use crate::resume::prompts::{PROFILE_TEXT_PLACEHOLDER, RESUME_PROMPT_TEMPLATE};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("model returned invalid resume markup: {0}")]
    InvalidMarkup(String),
}

/// Substitutes the extracted profile text into the fixed template.
pub fn build_resume_prompt(profile_text: &str) -> String {
    RESUME_PROMPT_TEMPLATE.replace(PROFILE_TEXT_PLACEHOLDER, profile_text)
}

/// Sends one prompt built from `profile_text` and returns the validated HTML.
pub async fn generate_resume_html(
    generator: &dyn TextGenerator,
    profile_text: &str,
) -> Result<String, GenerationError> {
    let prompt = build_resume_prompt(profile_text);
    info!(
        "Requesting resume generation ({} chars of profile text)",
        profile_text.len()
    );

    let raw = generator.generate(&prompt).await?;
    let html = strip_html_fences(&raw);
    validate_resume_html(html)?;

    Ok(html.to_string())
}

/// Strips ```html ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_html_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```html")
        .or_else(|| text.strip_prefix("```HTML"))
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim()),
        None => text,
    }
}

/// Minimal structural check: a document root, a body and a name heading.
pub fn validate_resume_html(html: &str) -> Result<(), GenerationError> {
    let lower = html.to_ascii_lowercase();

    let open = lower
        .find("<html")
        .ok_or_else(|| GenerationError::InvalidMarkup("missing <html> root".to_string()))?;
    let close = lower
        .rfind("</html>")
        .ok_or_else(|| GenerationError::InvalidMarkup("missing </html>".to_string()))?;
    if close < open {
        return Err(GenerationError::InvalidMarkup(
            "</html> appears before <html>".to_string(),
        ));
    }

    let document = &lower[open..close];
    if !document.contains("<body") {
        return Err(GenerationError::InvalidMarkup("missing <body>".to_string()));
    }
    if !(document.contains("<h1") || document.contains("<h2")) {
        return Err(GenerationError::InvalidMarkup(
            "missing name heading (<h1> or <h2>)".to_string(),
        ));
    }

    Ok(())
}
