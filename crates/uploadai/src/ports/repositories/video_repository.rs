//! Video Repository Port
//!
//! Abstract interface for Video persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Video};

/// Repository interface for Video entities
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Find a Video by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, DomainError>;

    /// Insert a new Video
    async fn create(&self, video: &Video) -> Result<Video, DomainError>;

    /// Store a transcription unless one is already present.
    ///
    /// Returns the record as persisted: when another writer got there
    /// first, its transcription is kept and returned.
    async fn save_transcription(&self, id: Uuid, transcription: &str)
        -> Result<Video, DomainError>;
}
