//! Prompt - Completion Templates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use uploadai::Prompt;

/// Create Prompt request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePromptRequest {
    pub title: String,
    /// Template text; `{transcription}` is replaced at completion time
    pub template: String,
}

/// Update Prompt request (full replacement of title and template)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePromptRequest {
    pub title: String,
    pub template: String,
}

/// Prompt response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponse {
    pub id: Uuid,
    pub title: String,
    pub template: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Prompt> for PromptResponse {
    fn from(prompt: Prompt) -> Self {
        Self {
            id: prompt.id,
            title: prompt.title,
            template: prompt.template,
            created_at: prompt.created_at,
            updated_at: prompt.updated_at,
        }
    }
}
