pub mod gemini;
pub mod interface;
pub mod prompt;

pub use gemini::GeminiClient;
pub use interface::*;
pub use prompt::build_prompt;

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::TranslateError;

/// Shown in place of a translation when the model returns nothing usable
pub const NO_TRANSLATION: &str = "No translation returned.";

/// Sends user text to the generation service and extracts the translation
#[derive(Clone)]
pub struct Translator {
    service: Arc<dyn GenerationService>,
    model: String,
}

impl Translator {
    pub fn new(service: Arc<dyn GenerationService>, model: impl Into<String>) -> Self {
        let model = model.into();
        info!("Initialized Translator: model={}", model);
        Self { service, model }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn service(&self) -> &Arc<dyn GenerationService> {
        &self.service
    }

    /// Translate `text` to English with a single remote call.
    ///
    /// Blank input is rejected without contacting the service. Remote
    /// failures are returned as errors and never retried.
    pub async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let prompt = build_prompt(text);
        debug!("Requesting translation of {} chars", text.chars().count());
        let output = self.service.generate(&self.model, &prompt).await?;
        Ok(extract_translation(output))
    }
}

/// Trim the model output, falling back to [`NO_TRANSLATION`]
pub fn extract_translation(output: Option<String>) -> String {
    match output.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => {
            warn!("Generation service returned no text");
            NO_TRANSLATION.to_string()
        }
    }
}
