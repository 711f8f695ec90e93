//! Video - Uploaded Audio Clip
//!
//! Pure domain entity without infrastructure dependencies.
//! The name is historical: uploads are audio extracted client-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Only this extension is accepted on upload (compared case-sensitively)
pub const SUPPORTED_AUDIO_EXTENSION: &str = "mp3";

/// Upload ceiling: 25 MiB
pub const MAX_UPLOAD_BYTES: u64 = 25 * 1_048_576;

/// Video - A stored audio clip plus its cached transcription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: Uuid,
    /// Original filename as uploaded
    pub name: String,
    /// Absolute location of the audio file on local disk
    pub path: String,
    /// Written once by the transcription flow, authoritative afterwards
    pub transcription: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Video {
    /// Create a new video record for an already stored file
    pub fn new(id: Uuid, name: String, path: String) -> Self {
        Self {
            id,
            name,
            path,
            transcription: None,
            created_at: Utc::now(),
        }
    }

    /// Whether `file_name` carries the supported audio extension
    pub fn is_supported_file(file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == SUPPORTED_AUDIO_EXTENSION)
    }

    /// On-disk name for an upload: `<unix-millis>-<id>.mp3`
    pub fn stored_file_name(id: Uuid, uploaded_at: DateTime<Utc>) -> String {
        format!(
            "{}-{}.{}",
            uploaded_at.timestamp_millis(),
            id,
            SUPPORTED_AUDIO_EXTENSION
        )
    }
}
