use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::interface::GenerationService;
use crate::config::{ApiKey, TranslatorConfig};
use crate::error::TranslateError;

/// Client for the Gemini REST API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: ApiKey,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub thought: bool,
}

impl GenerateContentResponse {
    /// Text of the first candidate with thought parts dropped
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let mut texts = parts
            .iter()
            .filter(|p| !p.thought)
            .filter_map(|p| p.text.as_deref())
            .peekable();
        texts.peek()?;
        Some(texts.collect())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelInfo>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelInfo {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

/// Extract the generated text from a raw `generateContent` body.
/// Bodies that do not decode count as "no text".
pub fn parse_response(body: &[u8]) -> Option<String> {
    match serde_json::from_slice::<GenerateContentResponse>(body) {
        Ok(response) => response.text(),
        Err(e) => {
            warn!("Malformed generateContent response: {}", e);
            None
        }
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Accept both `models/gemini-x` and bare `gemini-x`
fn model_path(model: &str) -> String {
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_string()
    } else {
        format!("models/{}", model)
    }
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, api_key: ApiKey) -> Self {
        Self::with_http_client(Client::new(), base_url, api_key)
    }

    /// Use a preconfigured reqwest client (proxy, TLS or timeout settings)
    pub fn with_http_client(client: Client, base_url: impl Into<String>, api_key: ApiKey) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Initialized GeminiClient: base_url={}", base_url);
        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub fn from_config(config: &TranslatorConfig, api_key: ApiKey) -> Self {
        Self::new(config.base_url.clone(), api_key)
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.base_url, model_path(model))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, TranslateError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(TranslateError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<Option<String>, TranslateError> {
        let url = self.generate_url(model);
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose())
            .json(&request)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let body = response.bytes().await?;
        Ok(parse_response(&body))
    }

    async fn list_models(&self) -> Result<Vec<String>, TranslateError> {
        let url = format!("{}/models", self.base_url);
        let mut names = Vec::new();
        let mut page_token: Option<String> = None;
        let mut seen_tokens: HashSet<String> = HashSet::new();

        loop {
            let mut request = self
                .client
                .get(&url)
                .header("x-goog-api-key", self.api_key.expose());
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let response = Self::check(request.send().await?).await?;
            let page: ModelList = response.json().await?;
            names.extend(page.models.into_iter().map(|m| m.name));

            match page.next_page_token {
                Some(token) if token.is_empty() => break,
                Some(token) if seen_tokens.insert(token.clone()) => page_token = Some(token),
                Some(token) => {
                    warn!("Model listing repeated page token {}, stopping", token);
                    break;
                }
                None => break,
            }
        }

        debug!("Listed {} models", names.len());
        Ok(names)
    }
}
