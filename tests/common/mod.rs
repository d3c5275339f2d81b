#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use nepsin_translator::config::Config;
use nepsin_translator::error::TranslateError;
use nepsin_translator::state::AppState;
use nepsin_translator::translate::{GenerationService, Translator};

/// What the simulated service answers with
#[derive(Clone)]
pub enum Reply {
    Text(Option<String>),
    Fail(u16),
}

/// Generation service double that records every call
pub struct FakeService {
    reply: Reply,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl FakeService {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn text(text: &str) -> Arc<Self> {
        Self::new(Reply::Text(Some(text.to_string())))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(_, p)| p.clone())
    }
}

#[async_trait]
impl GenerationService for FakeService {
    async fn generate(&self, model: &str, prompt: &str) -> Result<Option<String>, TranslateError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));
        match &self.reply {
            Reply::Text(t) => Ok(t.clone()),
            Reply::Fail(status) => Err(TranslateError::Api {
                status: *status,
                message: "quota exceeded".to_string(),
            }),
        }
    }

    async fn list_models(&self) -> Result<Vec<String>, TranslateError> {
        Ok(vec![
            "models/gemini-flash-latest".to_string(),
            "models/gemini-pro-latest".to_string(),
        ])
    }
}

pub fn translator(service: Arc<FakeService>) -> Translator {
    Translator::new(service, "models/gemini-flash-latest")
}

pub fn app_state(service: Arc<FakeService>) -> AppState {
    AppState::with_service(Config::default(), service)
}
