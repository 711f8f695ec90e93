//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod openai;
pub mod postgres;
pub mod storage;

// Re-exports
pub use openai::{OpenAiCompletion, OpenAiConfig, OpenAiTranscriber};
pub use postgres::{PgPromptRepository, PgVideoRepository};
pub use storage::LocalAudioStore;
