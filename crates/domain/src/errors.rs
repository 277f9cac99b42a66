//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Question was empty or whitespace-only
    #[error("Question must not be empty")]
    EmptyQuestion,

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
