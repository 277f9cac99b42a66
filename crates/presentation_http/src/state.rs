//! Application state shared across handlers

use std::sync::Arc;

use application::AskService;

use crate::templates::Pages;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Service answering questions with fallback handling
    pub ask_service: Arc<AskService>,
    /// Compiled HTML templates
    pub pages: Arc<Pages>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
