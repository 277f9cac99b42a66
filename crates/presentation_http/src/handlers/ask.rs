//! Question handlers: HTML form flow and JSON API

use axum::Json;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use domain::Question;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::error::ApiError;
use crate::state::AppState;
use crate::templates::IndexPage;

/// Form body for `POST /ask`
#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub question: String,
}

/// JSON body for `POST /api/ask`
#[derive(Debug, Deserialize)]
pub struct AskApiRequest {
    #[serde(default)]
    pub question: String,
}

/// JSON response for `POST /api/ask`
#[derive(Debug, Serialize)]
pub struct AskApiResponse {
    pub question: String,
    pub answer: String,
    pub success: bool,
}

/// Redirect back to the index page with a flash message
fn flash_redirect(message: &str, level: &str) -> Redirect {
    let target = format!(
        "/?flash={}&level={}",
        urlencoding::encode(message),
        urlencoding::encode(level)
    );
    Redirect::to(&target)
}

/// Handle a form-based question submission
#[instrument(skip(state, form), fields(question_len = form.question.len()))]
pub async fn ask_form(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<AskForm>,
) -> Response {
    let Ok(question) = Question::new(form.question) else {
        return flash_redirect("Please enter a question.", "warning").into_response();
    };

    if !state.ask_service.is_available() {
        return flash_redirect(
            "AI service is currently unavailable. Please check your API configuration.",
            "danger",
        )
        .into_response();
    }

    info!(question = %question, "Processing question");

    match state.ask_service.ask(&question).await {
        Ok(answer) => {
            let page = IndexPage {
                question: Some(question.to_string()),
                answer: Some(answer),
                success: true,
                ..Default::default()
            };
            match state.pages.render_index(&page) {
                Ok(html) => Html(html).into_response(),
                Err(e) => {
                    error!(error = %e, "Failed to render answer page");
                    ApiError::Internal(e.to_string()).into_response()
                },
            }
        },
        Err(e) => {
            error!(error = %e, "Error processing question");
            flash_redirect(
                &format!("An error occurred while processing your question: {e}"),
                "danger",
            )
            .into_response()
        },
    }
}

/// Handle a JSON question submission
#[instrument(skip(state, request), fields(question_len = request.question.len()))]
pub async fn ask_api(
    State(state): State<AppState>,
    Json(request): Json<AskApiRequest>,
) -> Result<Json<AskApiResponse>, ApiError> {
    let question = Question::new(request.question)
        .map_err(|_| ApiError::BadRequest("Please provide a question".to_string()))?;

    if !state.ask_service.is_available() {
        return Err(ApiError::ServiceUnavailable(
            "AI service is currently unavailable".to_string(),
        ));
    }

    info!(question = %question, "API processing question");

    let answer = state.ask_service.ask(&question).await?;

    Ok(Json(AskApiResponse {
        question: question.to_string(),
        answer,
        success: true,
    }))
}

// URL encoding helper for flash redirect targets
mod urlencoding {
    pub fn encode(input: &str) -> String {
        let mut result = String::with_capacity(input.len() * 3);
        for c in input.chars() {
            match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
                ' ' => result.push('+'),
                _ => {
                    for b in c.to_string().as_bytes() {
                        result.push_str(&format!("%{b:02X}"));
                    }
                },
            }
        }
        result
    }
}
