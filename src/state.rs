use std::sync::Arc;

use crate::config::{ApiKey, Config};
use crate::translate::{GeminiClient, GenerationService, Translator};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Translator,
}

impl AppState {
    /// Build the process-wide state from a loaded config and the startup key
    pub fn new(config: Config, api_key: ApiKey) -> Self {
        let client = GeminiClient::from_config(&config.translator_config, api_key);
        Self::with_service(config, Arc::new(client))
    }

    pub fn with_service(config: Config, service: Arc<dyn GenerationService>) -> Self {
        let translator = Translator::new(service, config.translator_config.model.clone());
        Self { config, translator }
    }
}
