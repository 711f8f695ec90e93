//! Video Routes - Upload and Transcription

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use futures_util::TryStreamExt;
use uuid::Uuid;

use uploadai::{DomainError, MAX_UPLOAD_BYTES};

use crate::error::{ApiError, ErrorResponse};
use crate::extract::{ApiJson, ApiPath};
use crate::models::{
    CreateTranscriptionRequest, UploadVideoForm, UploadVideoResponse, VideoResponse,
};
use crate::AppState;

/// Request body cap for uploads: the file ceiling plus room for multipart framing
const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES as usize + 1_048_576;

fn multipart_error(e: MultipartError) -> DomainError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        DomainError::PayloadTooLarge {
            limit: MAX_UPLOAD_BYTES,
        }
    } else {
        DomainError::validation(format!("Failed to read multipart: {}", e.body_text()))
    }
}

/// Upload an audio file
#[utoipa::path(
    post,
    path = "/videos/upload",
    request_body(content = UploadVideoForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Audio stored", body = UploadVideoResponse),
        (status = 400, description = "No file or not an .mp3", body = ErrorResponse),
        (status = 413, description = "File larger than 25 MiB", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Video"
)]
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_video(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadVideoResponse>, ApiError> {
    // Plain form fields ahead of the file are skipped
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::from(multipart_error(e)))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            tracing::debug!(field = ?field.name(), "Skipping non-file form field");
            continue;
        };
        tracing::debug!(file_name = %file_name, "Processing audio upload");

        let video = state
            .video_service
            .upload(&file_name, field.map_err(multipart_error))
            .await?;

        return Ok(Json(UploadVideoResponse {
            video: VideoResponse::from(video),
        }));
    }

    Err(ApiError::bad_request("No file uploaded"))
}

/// Transcribe an uploaded audio file
///
/// Returns the stored transcription when one exists; the speech-to-text
/// service is only called the first time.
#[utoipa::path(
    post,
    path = "/videos/{videoId}/transcription",
    params(
        ("videoId" = Uuid, Path, description = "Video ID")
    ),
    request_body = CreateTranscriptionRequest,
    responses(
        (status = 200, description = "Transcription text", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid video ID or body", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 502, description = "Transcription service failed", body = ErrorResponse)
    ),
    tag = "Video"
)]
pub async fn create_transcription(
    State(state): State<AppState>,
    ApiPath(video_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<CreateTranscriptionRequest>,
) -> Result<String, ApiError> {
    let transcription = state
        .video_service
        .transcribe(video_id, &payload.prompt)
        .await
        .map_err(|e| match e {
            DomainError::NotFound { .. } => {
                ApiError::new(StatusCode::NOT_FOUND, "Video not found")
            }
            _ => e.into(),
        })?;

    Ok(transcription)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/videos/upload",
            post(upload_video).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/videos/:video_id/transcription", post(create_transcription))
}
