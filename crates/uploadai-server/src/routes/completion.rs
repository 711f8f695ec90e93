//! Completion Routes - LLM over a transcription

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use uploadai::{DomainError, PromptTemplate};

use crate::error::{ApiError, ErrorResponse};
use crate::extract::ApiJson;
use crate::models::CompletionRequest;
use crate::AppState;

/// Generate a completion from a template and a video's transcription
///
/// The first `{transcription}` in the template is replaced by the stored
/// transcription; the provider's response body is returned unchanged.
#[utoipa::path(
    post,
    path = "/ai/completion",
    request_body = CompletionRequest,
    responses(
        (status = 200, description = "Raw completion response", body = serde_json::Value),
        (status = 400, description = "Temperature out of range or video not transcribed", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 502, description = "Completion service failed", body = ErrorResponse)
    ),
    tag = "AI"
)]
pub async fn generate_completion(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CompletionRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let response = state
        .completion_service
        .complete(
            payload.video_id,
            PromptTemplate::new(payload.template),
            payload.temperature,
        )
        .await
        .map_err(|e| match e {
            DomainError::NotFound { .. } => {
                ApiError::new(StatusCode::NOT_FOUND, "Video not found")
            }
            _ => e.into(),
        })?;

    Ok(Json(response))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/ai/completion", post(generate_completion))
}
