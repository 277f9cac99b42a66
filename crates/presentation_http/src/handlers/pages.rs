//! Page handlers

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;
use crate::templates::IndexPage;

/// Query parameters carrying a one-shot flash message after a redirect
#[derive(Debug, Default, Deserialize)]
pub struct IndexParams {
    #[serde(default)]
    pub flash: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

/// Render the question/answer page (empty on first load)
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<Html<String>, ApiError> {
    let html = state
        .pages
        .render_index(&IndexPage {
            flash: params.flash,
            flash_level: params.level,
            ..Default::default()
        })
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Html(html))
}
