//! Health check handler

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub llm_available: bool,
    pub api_key_configured: bool,
}

/// Health check - is the server running and is inference usable?
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let configured = state.ask_service.is_available();

    Json(HealthResponse {
        status: "healthy".to_string(),
        llm_available: configured,
        api_key_configured: configured,
    })
}
