//! Prompt Routes - Template Management
//!
//! HTTP handlers that delegate to PromptService for business logic.

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::error::{ApiError, ErrorResponse};
use crate::extract::{ApiJson, ApiPath};
use crate::models::{CreatePromptRequest, PromptResponse, UpdatePromptRequest};
use crate::AppState;

fn prompt_not_found() -> ApiError {
    ApiError::new(axum::http::StatusCode::NOT_FOUND, "Prompt not found")
}

/// List all Prompts
#[utoipa::path(
    get,
    path = "/prompts",
    responses(
        (status = 200, description = "List of all Prompts", body = Vec<PromptResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn list_prompts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PromptResponse>>, ApiError> {
    let prompts = state.prompt_service.list_all().await?;

    Ok(Json(prompts.into_iter().map(Into::into).collect()))
}

/// Create new Prompt
#[utoipa::path(
    post,
    path = "/prompts",
    request_body = CreatePromptRequest,
    responses(
        (status = 200, description = "Prompt created successfully", body = PromptResponse),
        (status = 400, description = "Invalid prompt", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn create_prompt(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreatePromptRequest>,
) -> Result<Json<PromptResponse>, ApiError> {
    let prompt = state
        .prompt_service
        .create(payload.title, payload.template)
        .await?;

    Ok(Json(prompt.into()))
}

/// Get Prompt by ID
#[utoipa::path(
    get,
    path = "/prompts/{id}",
    params(
        ("id" = Uuid, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Prompt found", body = PromptResponse),
        (status = 404, description = "Prompt not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<PromptResponse>, ApiError> {
    let prompt = state
        .prompt_service
        .get_by_id(id)
        .await?
        .ok_or_else(prompt_not_found)?;

    Ok(Json(prompt.into()))
}

/// Update Prompt
#[utoipa::path(
    put,
    path = "/prompts/{id}",
    params(
        ("id" = Uuid, Path, description = "Prompt ID")
    ),
    request_body = UpdatePromptRequest,
    responses(
        (status = 200, description = "Prompt updated successfully", body = PromptResponse),
        (status = 400, description = "Invalid prompt", body = ErrorResponse),
        (status = 404, description = "Prompt not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn update_prompt(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdatePromptRequest>,
) -> Result<Json<PromptResponse>, ApiError> {
    let prompt = state
        .prompt_service
        .update(id, payload.title, payload.template)
        .await
        .map_err(|e| match e {
            uploadai::DomainError::NotFound { .. } => prompt_not_found(),
            _ => e.into(),
        })?;

    Ok(Json(prompt.into()))
}

/// Delete Prompt
#[utoipa::path(
    delete,
    path = "/prompts/{id}",
    params(
        ("id" = Uuid, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Deleted Prompt", body = PromptResponse),
        (status = 404, description = "Prompt not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn delete_prompt(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<PromptResponse>, ApiError> {
    let deleted = state
        .prompt_service
        .delete(id)
        .await?
        .ok_or_else(prompt_not_found)?;

    Ok(Json(deleted.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prompts", get(list_prompts).post(create_prompt))
        .route(
            "/prompts/:id",
            get(get_prompt).put(update_prompt).delete(delete_prompt),
        )
}
