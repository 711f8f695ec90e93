//! Video Application Service (Use Case)
//!
//! Upload of audio clips and their (cached) transcription.

use bytes::Bytes;
use chrono::Utc;
use futures_util::{Stream, StreamExt};
use std::sync::Arc;
use uuid::Uuid;

use uploadai::{
    AudioStore, DomainError, TranscriptionProvider, TranscriptionRequest, Video, VideoRepository,
    MAX_UPLOAD_BYTES, TRANSCRIPTION_TEMPERATURE,
};

use super::KeyedLocks;

pub const DEFAULT_TRANSCRIPTION_LANGUAGE: &str = "pt";

/// Application service for Video operations
pub struct VideoService {
    repo: Arc<dyn VideoRepository>,
    store: Arc<dyn AudioStore>,
    transcriber: Arc<dyn TranscriptionProvider>,
    language: String,
    in_flight: KeyedLocks<Uuid>,
}

impl VideoService {
    pub fn new(
        repo: Arc<dyn VideoRepository>,
        store: Arc<dyn AudioStore>,
        transcriber: Arc<dyn TranscriptionProvider>,
    ) -> Self {
        Self {
            repo,
            store,
            transcriber,
            language: DEFAULT_TRANSCRIPTION_LANGUAGE.to_string(),
            in_flight: KeyedLocks::new(),
        }
    }

    /// Override the spoken language sent to the transcription provider
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Store an uploaded audio file and record it.
    ///
    /// The extension is checked before anything touches disk. The payload
    /// is streamed to storage and discarded if it grows past the limit.
    pub async fn upload<S>(&self, file_name: &str, chunks: S) -> Result<Video, DomainError>
    where
        S: Stream<Item = Result<Bytes, DomainError>> + Send,
    {
        if !Video::is_supported_file(file_name) {
            tracing::warn!(file_name, "Rejected upload with unsupported extension");
            return Err(DomainError::validation("Invalid file type"));
        }

        let id = Uuid::new_v4();
        let stored_name = Video::stored_file_name(id, Utc::now());
        let mut upload = self.store.begin(&stored_name).await?;

        let mut chunks = std::pin::pin!(chunks);
        let mut total: u64 = 0;
        while let Some(chunk) = chunks.next().await {
            let written = match chunk {
                Ok(bytes) => {
                    total += bytes.len() as u64;
                    if total > MAX_UPLOAD_BYTES {
                        tracing::warn!(file_name, limit = MAX_UPLOAD_BYTES, "Upload too large");
                        Err(DomainError::PayloadTooLarge {
                            limit: MAX_UPLOAD_BYTES,
                        })
                    } else {
                        upload.write(&bytes).await
                    }
                }
                Err(e) => Err(e),
            };

            if let Err(e) = written {
                if let Err(abort_err) = upload.abort().await {
                    tracing::warn!(error = %abort_err, "Failed to discard partial upload");
                }
                return Err(e);
            }
        }

        let path = upload.commit().await?;
        let video = Video::new(id, file_name.to_string(), path);

        let saved = self.repo.create(&video).await.map_err(|e| {
            tracing::error!(path = %video.path, error = %e, "Stored audio has no video record");
            e
        })?;

        tracing::info!(
            "Uploaded Video: {} ({}) - {} bytes",
            saved.name,
            saved.id,
            total
        );

        Ok(saved)
    }

    /// Return the video's transcription, generating it on first request.
    ///
    /// Concurrent requests for the same video share a single provider call:
    /// the first one transcribes, the rest wait and read the stored result.
    pub async fn transcribe(&self, id: Uuid, prompt: &str) -> Result<String, DomainError> {
        let video = self.find(id).await?;
        if let Some(text) = video.transcription {
            tracing::debug!(video_id = %id, "Transcription cache hit");
            return Ok(text);
        }

        let _guard = self.in_flight.lock(id).await;

        // Someone else may have finished while we waited
        let video = self.find(id).await?;
        if let Some(text) = video.transcription {
            tracing::debug!(video_id = %id, "Transcription completed by concurrent request");
            return Ok(text);
        }

        let audio = self.store.read(&video.path).await?;

        tracing::info!(
            video_id = %id,
            model = self.transcriber.model_id(),
            bytes = audio.len(),
            "Transcribing video"
        );

        let text = self
            .transcriber
            .transcribe(TranscriptionRequest {
                file_name: video.name,
                audio,
                prompt: prompt.to_string(),
                language: self.language.clone(),
                temperature: TRANSCRIPTION_TEMPERATURE,
            })
            .await?;

        let saved = self.repo.save_transcription(id, &text).await.map_err(|e| {
            tracing::error!(video_id = %id, error = %e, "Transcription produced but not stored");
            e
        })?;

        Ok(saved.transcription.unwrap_or(text))
    }

    async fn find(&self, id: Uuid) -> Result<Video, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Video", id))
    }
}
