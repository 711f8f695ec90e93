//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod prompt_repository;
mod video_repository;

pub use prompt_repository::*;
pub use video_repository::*;
