//! OpenAI Chat implementation of CompletionProvider

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use uploadai::{ChatCompletionRequest, CompletionProvider, DomainError};

use super::{error_from_response, OpenAiConfig};

pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo-16k";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Chat completion via `POST {base}/chat/completions`
pub struct OpenAiCompletion {
    client: Client,
    config: OpenAiConfig,
    model: String,
}

impl OpenAiCompletion {
    pub fn new(client: Client, config: OpenAiConfig, model: Option<String>) -> Self {
        Self {
            client,
            config,
            model: model.unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletion {
    async fn complete(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<serde_json::Value, DomainError> {
        let body = ChatRequest {
            model: &self.model,
            temperature: request.temperature.value(),
            messages: [ChatMessage {
                role: "user",
                content: &request.message,
            }],
        };

        tracing::debug!(
            model = %self.model,
            temperature = body.temperature,
            chars = request.message.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.config.endpoint("chat/completions"))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("request: {e}")))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("body: {e}")))?;

        tracing::info!(
            model = %self.model,
            total_tokens = raw["usage"]["total_tokens"].as_u64(),
            "Chat completion finished"
        );

        Ok(raw)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
