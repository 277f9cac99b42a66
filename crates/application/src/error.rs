//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Configuration error (e.g. missing inference credential)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ai_core::InferenceError> for ApplicationError {
    fn from(err: ai_core::InferenceError) -> Self {
        match err {
            ai_core::InferenceError::MissingCredential => {
                Self::Configuration("AI service is currently unavailable".to_string())
            },
            ai_core::InferenceError::ClientBuild(msg) => Self::Internal(msg),
        }
    }
}
