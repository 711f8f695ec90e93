use anyhow::Context;
use sqlx::PgPool;
use std::sync::Arc;

use uploadai_server::adapters::{
    LocalAudioStore, OpenAiCompletion, OpenAiConfig, OpenAiTranscriber, PgPromptRepository,
    PgVideoRepository,
};
use uploadai_server::application::{CompletionService, PromptService, VideoService};
use uploadai_server::config::ServerConfig;
use uploadai_server::{build_router, AppState};

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("upload.ai API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key))
        .context("Invalid server configuration")?;

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations completed");

    // Outbound client shared by both OpenAI adapters
    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let openai = OpenAiConfig::new(config.openai_api_key.clone())
        .with_base_url(config.openai_base_url.clone());

    let transcriber = Arc::new(OpenAiTranscriber::new(
        http.clone(),
        openai.clone(),
        Some(config.transcription_model.clone()),
    ));
    let llm = Arc::new(OpenAiCompletion::new(
        http,
        openai,
        Some(config.completion_model.clone()),
    ));

    tracing::info!(
        base_url = %config.openai_base_url,
        transcription_model = %config.transcription_model,
        completion_model = %config.completion_model,
        "OpenAI adapters initialized"
    );

    let store = Arc::new(
        LocalAudioStore::new(&config.upload_dir).context("Failed to prepare upload directory")?,
    );
    tracing::info!("Audio uploads stored in {}", store.root().display());

    // Initialize application services
    let prompt_repo = Arc::new(PgPromptRepository::new(pool.clone()));
    let video_repo = Arc::new(PgVideoRepository::new(pool));

    let state = AppState {
        prompt_service: Arc::new(PromptService::new(prompt_repo)),
        video_service: Arc::new(
            VideoService::new(video_repo.clone(), store, transcriber)
                .with_language(config.transcription_language.clone()),
        ),
        completion_service: Arc::new(CompletionService::new(video_repo, llm)),
    };

    let router = build_router(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("upload.ai API ready");

    Ok(router.into())
}
