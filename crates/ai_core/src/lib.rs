//! AI core layer for ShopSage
//!
//! Provides the inference client that talks to the hosted HuggingFace
//! Inference API, plus the port trait the application layer depends on.

pub mod config;
pub mod error;
pub mod huggingface;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use huggingface::HuggingFaceClient;
pub use ports::{InferenceOutcome, InferencePort};
