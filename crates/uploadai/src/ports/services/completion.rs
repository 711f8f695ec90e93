//! Completion Provider Port
//!
//! One-shot chat completion over a rendered template.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Temperature};

/// A single-turn completion: `message` is sent as the only user message
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub message: String,
    pub temperature: Temperature,
}

/// Chat completion provider interface
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run the completion and return the provider's response body unchanged
    async fn complete(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<serde_json::Value, DomainError>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
