//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod completion_service;
mod keyed_lock;
mod prompt_service;
mod video_service;

pub use completion_service::CompletionService;
pub use keyed_lock::KeyedLocks;
pub use prompt_service::PromptService;
pub use video_service::{VideoService, DEFAULT_TRANSCRIPTION_LANGUAGE};
