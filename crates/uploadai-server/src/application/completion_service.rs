//! Completion Application Service (Use Case)
//!
//! Renders a template with a video's transcription and forwards it to the LLM.

use std::sync::Arc;
use uuid::Uuid;

use uploadai::{
    ChatCompletionRequest, CompletionProvider, DomainError, PromptTemplate, Temperature,
    VideoRepository,
};

/// Application service for completions
pub struct CompletionService {
    videos: Arc<dyn VideoRepository>,
    llm: Arc<dyn CompletionProvider>,
}

impl CompletionService {
    pub fn new(videos: Arc<dyn VideoRepository>, llm: Arc<dyn CompletionProvider>) -> Self {
        Self { videos, llm }
    }

    /// Complete `template` with the transcription of `video_id`
    pub async fn complete(
        &self,
        video_id: Uuid,
        template: PromptTemplate,
        temperature: Option<f32>,
    ) -> Result<serde_json::Value, DomainError> {
        let temperature = Temperature::from_request(temperature)?;

        let video = self
            .videos
            .find_by_id(video_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Video", video_id))?;

        let transcription = video.transcription.ok_or_else(|| {
            DomainError::Precondition("Video transcription was not generated yet.".to_string())
        })?;

        tracing::info!(
            video_id = %video_id,
            model = self.llm.model_id(),
            temperature = temperature.value(),
            "Requesting completion"
        );

        self.llm
            .complete(ChatCompletionRequest {
                message: template.render(&transcription),
                temperature,
            })
            .await
    }
}
