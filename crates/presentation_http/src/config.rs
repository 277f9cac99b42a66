//! Application configuration
//!
//! Loaded once at startup and injected into clients and handlers at
//! construction time; nothing mutates it afterwards.

use ai_core::InferenceConfig;
use secrecy::SecretString;
use serde::Deserialize;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Inference client settings
    #[serde(default)]
    pub inference: InferenceConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Precedence, lowest to highest: struct defaults, optional
    /// `config.toml`, `SHOPSAGE_*` environment variables (e.g.
    /// `SHOPSAGE_SERVER__PORT`), then the two well-known variables
    /// `HUGGINGFACE_API_KEY` and `PORT`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("SHOPSAGE")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut app_config: Self = builder.build()?.try_deserialize()?;

        if let Ok(token) = std::env::var("HUGGINGFACE_API_KEY") {
            if !token.is_empty() {
                app_config.inference.api_token = Some(SecretString::from(token));
            }
        }

        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                app_config.server.port = port;
            }
        }

        Ok(app_config)
    }

    /// Socket address string to bind the server to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
