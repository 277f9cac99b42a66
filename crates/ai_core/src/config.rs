//! Configuration for the inference client

use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for the HuggingFace inference client
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the hosted inference API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier to query
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum new tokens to generate
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,

    /// Temperature for sampling
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Bearer token authorizing calls to the inference endpoint
    #[serde(default)]
    pub api_token: Option<SecretString>,
}

fn default_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_model_id() -> String {
    "google/flan-t5-small".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_max_new_tokens() -> u32 {
    200
}

const fn default_temperature() -> f32 {
    0.7
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model_id: default_model_id(),
            timeout_ms: default_timeout_ms(),
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            api_token: None,
        }
    }
}

impl InferenceConfig {
    /// Create a config with the given bearer token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            api_token: Some(SecretString::from(token.into())),
            ..Default::default()
        }
    }

    /// Whether a credential is configured
    pub const fn is_configured(&self) -> bool {
        self.api_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = InferenceConfig::default();
        assert_eq!(config.base_url, "https://api-inference.huggingface.co");
        assert_eq!(config.model_id, "google/flan-t5-small");
        assert_eq!(config.timeout_ms, 30000);
        assert_eq!(config.max_new_tokens, 200);
        assert!((config.temperature - 0.7).abs() < 0.01);
        assert!(config.api_token.is_none());
        assert!(!config.is_configured());
    }

    #[test]
    fn with_token_marks_configured() {
        let config = InferenceConfig::with_token("hf_test");
        assert!(config.is_configured());
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let json = r"{}";
        let config: InferenceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.model_id, "google/flan-t5-small");
        assert_eq!(config.timeout_ms, 30000);
    }

    #[test]
    fn config_deserialization_with_overrides() {
        let json = r#"{"base_url":"http://localhost:8080","model_id":"my-model","api_token":"secret"}"#;
        let config: InferenceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.model_id, "my-model");
        assert!(config.is_configured());
    }

    #[test]
    fn debug_does_not_leak_token() {
        let config = InferenceConfig::with_token("hf_super_secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("hf_super_secret"));
    }
}
