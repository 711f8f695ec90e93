//! Transcription Provider Port
//!
//! Abstract interface for speech-to-text services.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// A single speech-to-text request
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    /// Name sent alongside the audio (providers sniff the format from it)
    pub file_name: String,
    pub audio: Vec<u8>,
    /// Free-text hint (vocabulary, spelling of names, ...)
    pub prompt: String,
    /// ISO-639-1 language of the audio
    pub language: String,
    pub temperature: f32,
}

/// Speech-to-text provider interface
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    /// Transcribe audio and return the plain text
    async fn transcribe(&self, request: TranscriptionRequest) -> Result<String, DomainError>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
