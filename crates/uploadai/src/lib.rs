//! upload.ai Domain Library
//!
//! Core domain types and interfaces for the upload.ai backend.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Prompt, Video)
//!   - `value_objects/`: Immutable value types (PromptTemplate, Temperature)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces (audio storage, speech-to-text, completion)
//!
//! # Usage
//!
//! ```rust,ignore
//! use uploadai::domain::{Prompt, Video};
//! use uploadai::ports::{VideoRepository, TranscriptionProvider};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DomainError, Prompt, PromptTemplate, Temperature, Video, MAX_UPLOAD_BYTES,
    SUPPORTED_AUDIO_EXTENSION, TRANSCRIPTION_PLACEHOLDER, TRANSCRIPTION_TEMPERATURE,
};
pub use ports::{
    // Services
    AudioStore,
    AudioUpload,
    ChatCompletionRequest,
    CompletionProvider,
    // Repositories
    PromptRepository,
    TranscriptionProvider,
    TranscriptionRequest,
    VideoRepository,
};
