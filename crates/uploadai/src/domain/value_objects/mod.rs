//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod prompt_template;
mod temperature;

pub use prompt_template::*;
pub use temperature::*;
