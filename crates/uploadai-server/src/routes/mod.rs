//! upload.ai API Routes
//!
//! - /prompts - Prompt template management
//! - /videos/upload - Audio upload
//! - /videos/:videoId/transcription - Speech-to-text (cached)
//! - /ai/completion - LLM completion over a transcription

pub mod completion;
pub mod prompt;
pub mod swagger;
pub mod video;
