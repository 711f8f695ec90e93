//! Service Ports
//!
//! Abstract interfaces for external services.

mod audio_store;
mod completion;
mod transcription;

pub use audio_store::*;
pub use completion::*;
pub use transcription::*;
