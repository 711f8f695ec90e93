//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{
    // Completion models
    CompletionRequest,
    // Prompt models
    CreatePromptRequest,
    // Video models
    CreateTranscriptionRequest,
    PromptResponse,
    UpdatePromptRequest,
    UploadVideoForm,
    UploadVideoResponse,
    VideoResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Prompt endpoints
        super::prompt::list_prompts,
        super::prompt::create_prompt,
        super::prompt::get_prompt,
        super::prompt::update_prompt,
        super::prompt::delete_prompt,
        // Video endpoints
        super::video::upload_video,
        super::video::create_transcription,
        // AI endpoints
        super::completion::generate_completion,
    ),
    components(
        schemas(
            CreatePromptRequest,
            UpdatePromptRequest,
            PromptResponse,
            VideoResponse,
            UploadVideoResponse,
            UploadVideoForm,
            CreateTranscriptionRequest,
            CompletionRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Prompt", description = "Prompt template management"),
        (name = "Video", description = "Audio upload and transcription"),
        (name = "AI", description = "Completions over transcriptions"),
    ),
    info(
        title = "upload.ai API",
        description = "Upload audio, transcribe it, and run prompt templates over the transcription",
    )
)]
pub struct ApiDoc;
