//! OpenAI Implementations
//!
//! Speech-to-text (`/audio/transcriptions`) and chat completion
//! (`/chat/completions`) against any OpenAI-compatible base URL.

mod completion;
mod transcription;

pub use completion::{OpenAiCompletion, DEFAULT_COMPLETION_MODEL};
pub use transcription::{OpenAiTranscriber, DEFAULT_TRANSCRIPTION_MODEL};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Connection settings shared by both adapters
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Turn a non-2xx response into a domain error, keeping the body for diagnosis
async fn error_from_response(response: reqwest::Response) -> uploadai::DomainError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    tracing::warn!(%status, "OpenAI API error");
    uploadai::DomainError::ExternalService(format!("OpenAI API error {status}: {body}"))
}
