use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TranslateError;
use crate::script::Language;

/// A remote text generation endpoint.
///
/// Implementations make exactly one outbound call per `generate`. `Ok(None)`
/// means the service answered but produced no usable text.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<Option<String>, TranslateError>;

    /// Names of the models this service can be asked for
    async fn list_models(&self) -> Result<Vec<String>, TranslateError> {
        Ok(Vec::new())
    }
}

/// Body accepted by `/api/detect` and `/api/translate`
#[derive(Debug, Serialize, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DetectResponse {
    pub language: Language,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub request_id: Uuid,
    pub detected: DetectResponse,
    pub translation: String,
}

impl From<Language> for DetectResponse {
    fn from(language: Language) -> Self {
        Self {
            language,
            label: language.label().to_string(),
        }
    }
}
