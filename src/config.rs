use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub translator_config: TranslatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Model name passed verbatim to the generation endpoint
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_model() -> String {
    "models/gemini-flash-latest".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Config {
    /// Load a YAML or JSON(-LD) configuration file, substituting `${VAR}`
    /// references from the environment first.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::NotFound(display));
        }

        let bytes = fs::read(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        let content = decode_text(&bytes, &display);
        let content = substitute_env_vars(&content, &display)?;

        let lower = display.to_lowercase();
        if lower.ends_with(".jsonld") || lower.ends_with(".json") {
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: display,
                message: e.to_string(),
            })
        } else {
            serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: display,
                message: e.to_string(),
            })
        }
    }

    /// Resolve the configuration for this run.
    ///
    /// An explicitly requested file must exist. Otherwise the usual
    /// locations are tried in order and built-in defaults are used when
    /// none of them is present.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let config = Self::load(path)?;
            info!("Loaded configuration from: {}", path.display());
            return Ok(config);
        }

        for path in candidate_paths() {
            if !path.exists() {
                debug!("No config at {}", path.display());
                continue;
            }
            let config = Self::load(&path)?;
            info!("Loaded configuration from: {}", path.display());
            return Ok(config);
        }

        warn!("No configuration file found, using defaults");
        Ok(Self::default())
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    let mut paths: Vec<PathBuf> = Vec::new();
    if let Ok(p) = std::env::var("CONFIG_PATH") {
        paths.push(PathBuf::from(p));
    }
    paths.push(PathBuf::from("conf.yaml"));
    paths.push(PathBuf::from("conf.jsonld"));
    if let Some(dir) = exe_dir {
        paths.push(dir.join("conf.yaml"));
        paths.push(dir.join("conf.jsonld"));
    }
    paths
}

/// Decode file bytes as UTF-8, dropping a leading BOM.
fn decode_text(bytes: &[u8], path: &str) -> String {
    let (cow, _, had_errors) = encoding_rs::UTF_8.decode(bytes);
    if had_errors {
        warn!("Configuration file {} contains invalid UTF-8", path);
    }
    cow.into_owned()
}

/// Replace `${VAR_NAME}` with the value of the environment variable.
/// Unset variables are left untouched.
pub fn substitute_env_vars(content: &str, path: &str) -> Result<String, ConfigError> {
    let pattern = Regex::new(r"\$\{(\w+)\}").map_err(|e| ConfigError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

/// Gemini API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Read the key from `var` once, at startup.
    pub fn from_env(var: &str) -> Result<Self, ConfigError> {
        Self::from_value(var, std::env::var(var).ok())
    }

    pub fn from_value(var: &str, value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(Self(v.trim().to_string())),
            _ => Err(ConfigError::MissingApiKey(var.to_string())),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_gemini_flash() {
        let config = Config::default();
        assert_eq!(config.translator_config.model, "models/gemini-flash-latest");
        assert_eq!(config.translator_config.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.system_config.port, 8501);
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = ApiKey::from_value("GEMINI_API_KEY", None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey(ref v) if v == "GEMINI_API_KEY"));

        let err = ApiKey::from_value("GEMINI_API_KEY", Some("   ".into())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey(_)));
    }

    #[test]
    fn key_is_redacted_in_debug() {
        let key = ApiKey::from_value("K", Some("secret-value".into())).unwrap();
        assert_eq!(key.expose(), "secret-value");
        assert!(!format!("{:?}", key).contains("secret"));
    }

    #[test]
    fn unset_vars_are_left_alone() {
        let out = substitute_env_vars("model: ${NEPSIN_SURELY_UNSET_VAR}", "t").unwrap();
        assert_eq!(out, "model: ${NEPSIN_SURELY_UNSET_VAR}");
    }

    #[test]
    fn bom_is_stripped() {
        let text = decode_text(b"\xEF\xBB\xBFsystem_config: {}", "t");
        assert_eq!(text, "system_config: {}");
    }
}
