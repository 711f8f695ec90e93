//! Video - Uploaded audio and its transcription

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use uploadai::Video;

/// Video response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: Uuid,
    /// Original filename
    pub name: String,
    /// Where the audio is stored on the server
    pub path: String,
    pub transcription: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        Self {
            id: video.id,
            name: video.name,
            path: video.path,
            transcription: video.transcription,
            created_at: video.created_at,
        }
    }
}

/// Upload response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadVideoResponse {
    pub video: VideoResponse,
}

/// Multipart upload form (documentation only)
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadVideoForm {
    /// `.mp3` file, at most 25 MiB
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Transcription request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTranscriptionRequest {
    /// Hint for the speech-to-text model (keywords, names, spelling)
    pub prompt: String,
}
