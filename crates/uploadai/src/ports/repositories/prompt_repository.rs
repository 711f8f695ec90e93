//! Prompt Repository Port
//!
//! Abstract interface for Prompt persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Prompt};

/// Repository interface for Prompt entities
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Find a Prompt by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prompt>, DomainError>;

    /// Find all Prompts, newest first
    async fn find_all(&self) -> Result<Vec<Prompt>, DomainError>;

    /// Save a Prompt (insert or update)
    async fn save(&self, prompt: &Prompt) -> Result<Prompt, DomainError>;

    /// Delete a Prompt by ID, returning the removed record
    async fn delete(&self, id: Uuid) -> Result<Option<Prompt>, DomainError>;
}
