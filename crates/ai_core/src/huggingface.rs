//! HuggingFace Inference API client

use std::time::Duration;

use async_trait::async_trait;
use domain::Question;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{InferenceOutcome, InferencePort};

/// Persona preamble prepended to every question
const PROMPT_PREAMBLE: &str = "You are a helpful AI assistant specialized in retail and e-commerce. You provide accurate, helpful information about:
- Product recommendations
- Shopping advice  
- Retail trends
- Customer service
- Store operations
- Online shopping
- Product comparisons
- Pricing information
- Brand information";

/// Closing instruction appended after the question
const PROMPT_SUFFIX: &str =
    "Please provide a helpful, accurate, and detailed answer focused on retail and shopping:";

/// Success-path default when the endpoint returns no usable text
const EMPTY_GENERATION_MESSAGE: &str =
    "I apologize, but I couldn't generate a proper response. Please try rephrasing your question.";

/// Client for the hosted HuggingFace text-generation endpoint
pub struct HuggingFaceClient {
    client: Client,
    config: InferenceConfig,
}

impl std::fmt::Debug for HuggingFaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceClient")
            .field("model_id", &self.config.model_id)
            .finish_non_exhaustive()
    }
}

impl HuggingFaceClient {
    /// Create a new client from configuration
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ClientBuild(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.model_id,
            configured = config.is_configured(),
            "Initialized HuggingFace inference client"
        );

        Ok(Self { client, config })
    }

    /// URL of the text-generation endpoint for the configured model
    fn model_url(&self) -> String {
        format!(
            "{}/models/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model_id
        )
    }

    /// Build the fixed instructional prompt around the user's question
    fn build_prompt(question: &Question) -> String {
        format!("{PROMPT_PREAMBLE}\n\nQuestion: {question}\n\n{PROMPT_SUFFIX}")
    }
}

/// HuggingFace text-generation request body
#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

/// One element of the generation results array
#[derive(Debug, Deserialize)]
struct GenerationResult {
    #[serde(default)]
    generated_text: String,
}

#[async_trait]
impl InferencePort for HuggingFaceClient {
    #[instrument(skip(self, question), fields(model = %self.config.model_id))]
    async fn infer(&self, question: &Question) -> Result<InferenceOutcome, InferenceError> {
        // Fail fast before any network I/O when no credential is present
        let Some(token) = &self.config.api_token else {
            return Err(InferenceError::MissingCredential);
        };

        let prompt = Self::build_prompt(question);
        let request = GenerationRequest {
            inputs: &prompt,
            parameters: GenerationParameters {
                max_new_tokens: self.config.max_new_tokens,
                temperature: self.config.temperature,
                return_full_text: false,
            },
        };

        debug!("Sending request to inference endpoint");

        // Exactly one attempt; the configured timeout is the only bound
        let response = match self
            .client
            .post(self.model_url())
            .bearer_auth(token.expose_secret())
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Inference request failed at transport level");
                return Ok(InferenceOutcome::TransportError(e.to_string()));
            },
        };

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            warn!("Inference credential has insufficient permissions");
            return Ok(InferenceOutcome::AuthError);
        }
        if status == StatusCode::NOT_FOUND {
            warn!(model = %self.config.model_id, "Inference model not found");
            return Ok(InferenceOutcome::NotFoundError);
        }
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Inference API error");
            return Ok(InferenceOutcome::OtherApiError);
        }

        let body: serde_json::Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Failed to parse inference response");
                return Ok(InferenceOutcome::TransportError(e.to_string()));
            },
        };

        // A well-formed body that is not a results array (e.g. an error
        // object while the model is loading) counts as an empty generation
        let results: Vec<GenerationResult> = if body.is_array() {
            match serde_json::from_value(body) {
                Ok(results) => results,
                Err(e) => {
                    warn!(error = %e, "Unexpected shape of inference results");
                    return Ok(InferenceOutcome::TransportError(e.to_string()));
                },
            }
        } else {
            debug!("Inference returned a non-array body");
            Vec::new()
        };

        let text = results
            .first()
            .map(|r| r.generated_text.trim())
            .unwrap_or_default();

        if text.is_empty() {
            debug!("Inference returned no usable text");
            Ok(InferenceOutcome::Success(EMPTY_GENERATION_MESSAGE.to_string()))
        } else {
            debug!(chars = text.len(), "Inference completed");
            Ok(InferenceOutcome::Success(text.to_string()))
        }
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn model_id(&self) -> &str {
        &self.config.model_id
    }
}
