//! Audio Storage Implementations

mod local;

pub use local::LocalAudioStore;
