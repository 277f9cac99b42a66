//! Route definitions

use axum::Router;
use axum::routing::{get, post};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Question/answer page
        .route("/", get(handlers::pages::index))
        .route("/ask", post(handlers::ask::ask_form))
        // JSON API
        .route("/api/ask", post(handlers::ask::ask_api))
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Attach state
        .with_state(state)
}
