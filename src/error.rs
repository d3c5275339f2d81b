use thiserror::Error;

/// Errors raised while loading configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set. Add it to your environment or .env file")]
    MissingApiKey(String),

    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}: {message}")]
    Parse { path: String, message: String },
}

/// Errors raised by a translation attempt
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Please enter some text.")]
    EmptyInput,

    #[error("Request to generation service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation service returned {status}: {message}")]
    Api { status: u16, message: String },
}
