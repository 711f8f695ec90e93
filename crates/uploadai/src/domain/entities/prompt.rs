//! Prompt - Completion Templates
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Prompt - A titled template used to frame a completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: Uuid,
    pub title: String,
    /// Template text, conventionally containing `{transcription}`
    pub template: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Prompt {
    /// Create a new prompt with generated ID and timestamps
    pub fn new(title: String, template: String) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            template,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace title and template, keeping identity
    pub fn revise(&mut self, title: String, template: String) -> Result<(), DomainError> {
        Self::validate_title(&title)?;
        self.title = title;
        self.template = template;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::validation("title must not be empty"));
        }
        Ok(())
    }
}
