//! Local-filesystem implementation of AudioStore
//!
//! Backed by `object_store`'s `LocalFileSystem`. Multipart uploads are
//! staged next to their final name and only renamed into place on
//! `complete`, so readers never see a partial file.

use async_trait::async_trait;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use uploadai::{AudioStore, AudioUpload, DomainError};

/// Stores audio files flat under a single directory
pub struct LocalAudioStore {
    inner: Arc<LocalFileSystem>,
    root: PathBuf,
}

impl LocalAudioStore {
    /// Create the store, creating `root` if needed. Stored paths are absolute.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, DomainError> {
        let root = root.as_ref();
        std::fs::create_dir_all(root).map_err(|e| {
            DomainError::Storage(format!("Failed to create {}: {e}", root.display()))
        })?;
        let root = std::fs::canonicalize(root).map_err(|e| {
            DomainError::Storage(format!("Failed to resolve {}: {e}", root.display()))
        })?;
        let fs = LocalFileSystem::new_with_prefix(&root)
            .map_err(|e| DomainError::Storage(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(fs),
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Object key for a bare file name
    fn location(file_name: &str) -> Result<StorePath, DomainError> {
        let location = StorePath::parse(file_name)
            .map_err(|e| DomainError::Storage(format!("Invalid file name {file_name}: {e}")))?;
        if location.parts().count() != 1 {
            return Err(DomainError::Storage(format!(
                "Refusing to store outside the upload directory: {file_name}"
            )));
        }
        Ok(location)
    }
}

#[async_trait]
impl AudioStore for LocalAudioStore {
    async fn begin(&self, file_name: &str) -> Result<Box<dyn AudioUpload>, DomainError> {
        let location = Self::location(file_name)?;
        let upload = self
            .inner
            .put_multipart(&location)
            .await
            .map_err(|e| DomainError::Storage(format!("Failed to start {file_name}: {e}")))?;

        tracing::debug!(%location, "Started audio upload");

        Ok(Box::new(LocalUpload {
            upload,
            path: self.root.join(file_name),
            bytes_written: 0,
        }))
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, DomainError> {
        let file_name = Path::new(path)
            .strip_prefix(&self.root)
            .ok()
            .and_then(Path::to_str)
            .ok_or_else(|| {
                DomainError::Storage(format!("{path} is outside the upload directory"))
            })?;
        let location = Self::location(file_name)?;

        let result = self
            .inner
            .get(&location)
            .await
            .map_err(|e| DomainError::Storage(format!("Failed to open {path}: {e}")))?;
        let bytes = result
            .bytes()
            .await
            .map_err(|e| DomainError::Storage(format!("Failed to read {path}: {e}")))?;

        Ok(bytes.to_vec())
    }
}

struct LocalUpload {
    upload: Box<dyn MultipartUpload>,
    /// Absolute path the file lands on once completed
    path: PathBuf,
    bytes_written: u64,
}

#[async_trait]
impl AudioUpload for LocalUpload {
    async fn write(&mut self, chunk: &[u8]) -> Result<(), DomainError> {
        self.upload
            .put_part(PutPayload::from(chunk.to_vec()))
            .await
            .map_err(|e| {
                DomainError::Storage(format!("Failed to write {}: {e}", self.path.display()))
            })?;
        self.bytes_written += chunk.len() as u64;
        Ok(())
    }

    async fn commit(mut self: Box<Self>) -> Result<String, DomainError> {
        self.upload.complete().await.map_err(|e| {
            DomainError::Storage(format!("Failed to store {}: {e}", self.path.display()))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            bytes = self.bytes_written,
            "Committed audio upload"
        );

        Ok(self.path.display().to_string())
    }

    async fn abort(mut self: Box<Self>) -> Result<(), DomainError> {
        self.upload.abort().await.map_err(|e| {
            DomainError::Storage(format!("Failed to discard {}: {e}", self.path.display()))
        })
    }
}
