//! upload.ai API Models
//!
//! - Prompt: Completion templates
//! - Video: Uploaded audio and transcription
//! - Completion: LLM pass-through

mod completion;
mod prompt;
mod video;

pub use completion::*;
pub use prompt::*;
pub use video::*;
