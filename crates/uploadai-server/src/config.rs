//! Server Configuration
//!
//! Resolved from Shuttle secrets at startup. Only the API key is required.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::adapters::openai::{
    DEFAULT_BASE_URL, DEFAULT_COMPLETION_MODEL, DEFAULT_TRANSCRIPTION_MODEL,
};
use crate::application::DEFAULT_TRANSCRIPTION_LANGUAGE;

pub const DEFAULT_UPLOAD_DIR: &str = "tmp";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required secret: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub transcription_model: String,
    pub transcription_language: String,
    pub completion_model: String,
    pub upload_dir: PathBuf,
    /// Applied to every outbound provider request
    pub http_timeout: Duration,
}

impl ServerConfig {
    /// Build from a key lookup (Shuttle `SecretStore::get`, env, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key = get("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "HTTP_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            openai_api_key,
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            transcription_model: get("TRANSCRIPTION_MODEL")
                .unwrap_or_else(|| DEFAULT_TRANSCRIPTION_MODEL.to_string()),
            transcription_language: get("TRANSCRIPTION_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_TRANSCRIPTION_LANGUAGE.to_string()),
            completion_model: get("COMPLETION_MODEL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
            upload_dir: get("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            http_timeout,
        })
    }
}
