//! HTTP presentation layer for ShopSage
//!
//! Thin axum routing over the application layer: a form-based page, a JSON
//! API, and a health probe.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

pub use config::{AppConfig, ServerConfig};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
