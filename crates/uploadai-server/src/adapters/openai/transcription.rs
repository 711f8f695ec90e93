//! OpenAI Whisper implementation of TranscriptionProvider

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use uploadai::{DomainError, TranscriptionProvider, TranscriptionRequest};

use super::{error_from_response, OpenAiConfig};

pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Speech-to-text via `POST {base}/audio/transcriptions`
pub struct OpenAiTranscriber {
    client: Client,
    config: OpenAiConfig,
    model: String,
}

impl OpenAiTranscriber {
    pub fn new(client: Client, config: OpenAiConfig, model: Option<String>) -> Self {
        Self {
            client,
            config,
            model: model.unwrap_or_else(|| DEFAULT_TRANSCRIPTION_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl TranscriptionProvider for OpenAiTranscriber {
    #[tracing::instrument(level = "debug", skip(self, request), fields(file = %request.file_name, bytes = request.audio.len()))]
    async fn transcribe(&self, request: TranscriptionRequest) -> Result<String, DomainError> {
        let file_part = Part::bytes(request.audio)
            .file_name(request.file_name)
            .mime_str("audio/mpeg")
            .map_err(|e| DomainError::ExternalService(format!("mime: {e}")))?;

        let form = Form::new()
            .part("file", file_part)
            .text("model", self.model.clone())
            .text("language", request.language)
            .text("response_format", "json")
            .text("temperature", request.temperature.to_string())
            .text("prompt", request.prompt);

        tracing::debug!(model = %self.model, "Sending audio to OpenAI transcription API");

        let response = self
            .client
            .post(self.config.endpoint("audio/transcriptions"))
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("request: {e}")))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let data: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("body: {e}")))?;

        tracing::info!(chars = data.text.len(), "OpenAI transcription completed");

        Ok(data.text)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
