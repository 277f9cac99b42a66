//! Application layer for ShopSage
//!
//! Orchestrates the inference client and the fallback selector. The single
//! use case is answering a retail question: try the hosted model once, and
//! degrade to canned topic advice when the remote call fails.

pub mod error;
pub mod fallback;
pub mod services;

pub use error::ApplicationError;
pub use fallback::{FallbackCategory, fallback_response};
pub use services::AskService;
