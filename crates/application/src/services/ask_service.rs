//! Ask service - single-question answering with fallback

use std::fmt;
use std::sync::Arc;

use ai_core::{InferenceOutcome, InferencePort};
use domain::Question;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::fallback::{FallbackCategory, fallback_response};

/// Service answering a single retail question
///
/// Issues exactly one inference call and converts every remote failure into
/// user-facing text. Only configuration problems surface as errors.
pub struct AskService {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for AskService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AskService")
            .field("model_id", &self.inference.model_id())
            .finish_non_exhaustive()
    }
}

impl AskService {
    /// Create a new ask service
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Whether the underlying inference client has a credential configured
    pub fn is_available(&self) -> bool {
        self.inference.is_configured()
    }

    /// The model identifier answers are generated with
    pub fn model_id(&self) -> &str {
        self.inference.model_id()
    }

    /// Answer a question, degrading to canned advice on remote failure
    ///
    /// Transport-level failures keep their verbatim-message form instead of
    /// routing through the fallback selector; the two paths are deliberately
    /// distinct.
    #[instrument(skip(self, question), fields(question_len = question.as_str().len()))]
    pub async fn ask(&self, question: &Question) -> Result<String, ApplicationError> {
        let outcome = self.inference.infer(question).await?;

        let answer = match outcome {
            InferenceOutcome::Success(text) => {
                debug!("Answer generated by inference endpoint");
                text
            },
            InferenceOutcome::AuthError => {
                warn!("Falling back: insufficient API permissions");
                fallback_response(question, FallbackCategory::InsufficientPermissions)
            },
            InferenceOutcome::NotFoundError => {
                warn!("Falling back: model not found");
                fallback_response(question, FallbackCategory::ModelNotFound)
            },
            InferenceOutcome::OtherApiError => {
                warn!("Falling back: inference API error");
                fallback_response(question, FallbackCategory::ApiError)
            },
            InferenceOutcome::TransportError(message) => {
                warn!(error = %message, "Transport failure; reporting verbatim");
                format!("I encountered an error: {message}. Please try again.")
            },
        };

        Ok(answer)
    }
}
