//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Prompt: A titled completion template
//! - Video: An uploaded audio clip and its cached transcription

mod prompt;
mod video;

pub use prompt::*;
pub use video::*;
