//! Port definitions for inference
//!
//! Defines the trait (port) that inference adapters must implement and the
//! outcome type a single inference call produces.

use async_trait::async_trait;
use domain::Question;

use crate::error::InferenceError;

/// Outcome of a single inference call
///
/// Remote failures are data, not `Err`: each failure category is mapped to
/// canned fallback content by the application layer. Only preconditions
/// (missing credential) surface as [`InferenceError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceOutcome {
    /// The endpoint returned generated text
    Success(String),
    /// HTTP 403 - the credential lacks permission for this model
    AuthError,
    /// HTTP 404 - the model is unknown or not loaded
    NotFoundError,
    /// Any other non-success HTTP status
    OtherApiError,
    /// Network-level failure or unparseable response body
    TransportError(String),
}

impl InferenceOutcome {
    /// Whether this outcome carries generated text
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Port for inference client implementations
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Issue exactly one inference call for the given question
    async fn infer(&self, question: &Question) -> Result<InferenceOutcome, InferenceError>;

    /// Whether a credential is configured for this client
    fn is_configured(&self) -> bool;

    /// The model identifier this client queries
    fn model_id(&self) -> &str;
}
