//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    /// The request is well-formed but the entity is not in a state that allows it
    #[error("{0}")]
    Precondition(String),

    #[error("Payload exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: u64 },

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
