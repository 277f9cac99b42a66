//! Inference errors

use thiserror::Error;

/// Errors that prevent an inference call from being made at all.
///
/// Remote failures are not errors here; they are reported through
/// [`crate::InferenceOutcome`] so the caller can select a fallback.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// No API credential configured; checked before any network I/O
    #[error("Inference API credential not configured")]
    MissingCredential,

    /// Failed to construct the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}
