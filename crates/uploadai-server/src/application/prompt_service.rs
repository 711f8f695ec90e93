//! Prompt Application Service (Use Case)
//!
//! Orchestrates domain operations for Prompt management.

use std::sync::Arc;
use uuid::Uuid;

use uploadai::{DomainError, Prompt, PromptRepository};

/// Application service for Prompt operations
pub struct PromptService {
    repo: Arc<dyn PromptRepository>,
}

impl PromptService {
    pub fn new(repo: Arc<dyn PromptRepository>) -> Self {
        Self { repo }
    }

    /// Get all Prompts
    pub async fn list_all(&self) -> Result<Vec<Prompt>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a Prompt by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Prompt>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Create a new Prompt
    pub async fn create(&self, title: String, template: String) -> Result<Prompt, DomainError> {
        let prompt = Prompt::new(title, template)?;
        let saved = self.repo.save(&prompt).await?;

        tracing::info!("Created Prompt: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Replace a Prompt's title and template
    pub async fn update(
        &self,
        id: Uuid,
        title: String,
        template: String,
    ) -> Result<Prompt, DomainError> {
        let mut prompt = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        prompt.revise(title, template)?;

        self.repo.save(&prompt).await
    }

    /// Delete a Prompt, returning what was removed
    pub async fn delete(&self, id: Uuid) -> Result<Option<Prompt>, DomainError> {
        let deleted = self.repo.delete(id).await?;
        if deleted.is_some() {
            tracing::info!("Deleted Prompt: {}", id);
        }
        Ok(deleted)
    }
}
