//! upload.ai API Server
//!
//! HTTP API over prompts, uploaded audio, transcriptions and completions.
//! All collaborators are injected through [`AppState`]; `main` wires the
//! Postgres/OpenAI/filesystem adapters, tests wire in-memory doubles.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod adapters;
pub mod application;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;

use application::{CompletionService, PromptService, VideoService};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<PromptService>,
    pub video_service: Arc<VideoService>,
    pub completion_service: Arc<CompletionService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "upload.ai API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router with docs, CORS and request tracing
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::prompt::router())
        .merge(routes::video::router())
        .merge(routes::completion::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
