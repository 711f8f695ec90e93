//! PostgreSQL Repository Implementations

mod prompt_repository;
mod video_repository;

pub use prompt_repository::PgPromptRepository;
pub use video_repository::PgVideoRepository;
