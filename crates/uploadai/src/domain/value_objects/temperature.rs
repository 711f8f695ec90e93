//! Temperature - Sampling temperature for completions

use crate::domain::errors::DomainError;

/// Fixed sampling temperature used for speech-to-text
pub const TRANSCRIPTION_TEMPERATURE: f32 = 0.5;

/// Sampling temperature, always within `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature(f32);

impl Temperature {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 1.0;
    pub const DEFAULT: f32 = 0.5;

    pub fn new(value: f32) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::validation(format!(
                "temperature must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )));
        }
        Ok(Self(value))
    }

    /// Resolve an optional request value, falling back to the default
    pub fn from_request(value: Option<f32>) -> Result<Self, DomainError> {
        value.map_or(Ok(Self::default()), Self::new)
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
