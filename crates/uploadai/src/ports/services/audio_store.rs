//! Audio Store Port
//!
//! Abstract interface for storing uploaded audio payloads.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Storage for uploaded audio files
#[async_trait]
pub trait AudioStore: Send + Sync {
    /// Start writing a file. Nothing is visible under `file_name`
    /// until the returned upload is committed.
    async fn begin(&self, file_name: &str) -> Result<Box<dyn AudioUpload>, DomainError>;

    /// Read a previously committed file by the path `commit` returned
    async fn read(&self, path: &str) -> Result<Vec<u8>, DomainError>;
}

/// An in-progress upload
#[async_trait]
pub trait AudioUpload: Send {
    /// Append a chunk
    async fn write(&mut self, chunk: &[u8]) -> Result<(), DomainError>;

    /// Publish the file and return its stored path
    async fn commit(self: Box<Self>) -> Result<String, DomainError>;

    /// Discard everything written so far
    async fn abort(self: Box<Self>) -> Result<(), DomainError>;
}
