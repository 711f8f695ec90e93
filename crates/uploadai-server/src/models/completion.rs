//! Completion - LLM pass-through

use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Completion request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub video_id: Uuid,
    /// Template text; the first `{transcription}` is replaced
    pub template: String,
    /// Sampling temperature in [0, 1] (default: 0.5)
    pub temperature: Option<f32>,
}
