//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ai_core::{InferenceError, InferenceOutcome, InferencePort};
use application::AskService;
use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use domain::Question;
use presentation_http::routes::create_router;
use presentation_http::state::AppState;
use presentation_http::templates::Pages;
use serde_json::{Value, json};

/// Mock inference client for testing
struct MockInference {
    outcome: InferenceOutcome,
    configured: bool,
    calls: AtomicUsize,
}

impl MockInference {
    fn returning(outcome: InferenceOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            configured: true,
            calls: AtomicUsize::new(0),
        })
    }

    fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            outcome: InferenceOutcome::OtherApiError,
            configured: false,
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferencePort for MockInference {
    async fn infer(&self, _question: &Question) -> Result<InferenceOutcome, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.configured {
            Ok(self.outcome.clone())
        } else {
            Err(InferenceError::MissingCredential)
        }
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }
}

fn test_server(inference: Arc<MockInference>) -> TestServer {
    let state = AppState {
        ask_service: Arc::new(AskService::new(inference)),
        pages: Arc::new(Pages::new().expect("templates compile")),
    };
    TestServer::new(create_router(state)).expect("test server")
}

#[tokio::test]
async fn index_page_renders_empty_form() {
    let server = test_server(MockInference::returning(InferenceOutcome::Success(
        "unused".to_string(),
    )));

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<form"));
    assert!(html.contains("name=\"question\""));
}

#[tokio::test]
async fn index_page_renders_flash_from_query() {
    let server = test_server(MockInference::returning(InferenceOutcome::Success(
        "unused".to_string(),
    )));

    let response = server
        .get("/")
        .add_query_param("flash", "Please enter a question.")
        .add_query_param("level", "warning")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Please enter a question."));
    assert!(html.contains("alert-warning"));
}

#[tokio::test]
async fn health_reports_configured_service() {
    let server = test_server(MockInference::returning(InferenceOutcome::Success(
        "unused".to_string(),
    )));

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["llm_available"], true);
    assert_eq!(body["api_key_configured"], true);
}

#[tokio::test]
async fn health_reports_missing_credential() {
    let server = test_server(MockInference::unconfigured());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["llm_available"], false);
    assert_eq!(body["api_key_configured"], false);
}

#[tokio::test]
async fn api_ask_returns_answer() {
    let server = test_server(MockInference::returning(InferenceOutcome::Success(
        "Compare prices before buying.".to_string(),
    )));

    let response = server
        .post("/api/ask")
        .json(&json!({"question": "any deals?"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["question"], "any deals?");
    assert_eq!(body["answer"], "Compare prices before buying.");
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn api_ask_rejects_empty_question() {
    let inference = MockInference::returning(InferenceOutcome::Success("unused".to_string()));
    let server = test_server(Arc::clone(&inference));

    let response = server
        .post("/api/ask")
        .json(&json!({"question": "   "}))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "Please provide a question");
    assert_eq!(inference.call_count(), 0);
}

#[tokio::test]
async fn api_ask_rejects_missing_question_field() {
    let server = test_server(MockInference::returning(InferenceOutcome::Success(
        "unused".to_string(),
    )));

    let response = server.post("/api/ask").json(&json!({})).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn api_ask_unavailable_without_credential() {
    let server = test_server(MockInference::unconfigured());

    let response = server
        .post("/api/ask")
        .json(&json!({"question": "any deals?"}))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["error"], "AI service is currently unavailable");
}

#[tokio::test]
async fn api_ask_auth_failure_returns_fallback_answer() {
    let server = test_server(MockInference::returning(InferenceOutcome::AuthError));

    let response = server
        .post("/api/ask")
        .json(&json!({"question": "what's trending in retail?"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let answer = body["answer"].as_str().expect("answer string");
    assert!(answer.starts_with("**Current Retail Trends:**"));
    assert!(answer.contains("**⚠️ API Limitation Notice:**"));
}

#[tokio::test]
async fn api_ask_transport_failure_reports_verbatim_message() {
    let server = test_server(MockInference::returning(InferenceOutcome::TransportError(
        "connection timed out".to_string(),
    )));

    let response = server
        .post("/api/ask")
        .json(&json!({"question": "what's trending?"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["answer"],
        "I encountered an error: connection timed out. Please try again."
    );
}

#[tokio::test]
async fn form_ask_renders_answer_page() {
    let server = test_server(MockInference::returning(InferenceOutcome::Success(
        "Compare prices before buying.".to_string(),
    )));

    let response = server
        .post("/ask")
        .form(&[("question", "any deals?")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("any deals?"));
    assert!(html.contains("Compare prices before buying."));
}

#[tokio::test]
async fn form_ask_empty_question_redirects_without_inference_call() {
    let inference = MockInference::returning(InferenceOutcome::Success("unused".to_string()));
    let server = test_server(Arc::clone(&inference));

    let response = server.post("/ask").form(&[("question", "   ")]).await;

    response.assert_status(StatusCode::SEE_OTHER);
    let location = response.header("location");
    let location = location.to_str().expect("location header");
    assert!(location.starts_with("/?flash="));
    assert!(location.contains("level=warning"));
    assert_eq!(inference.call_count(), 0);
}

#[tokio::test]
async fn form_ask_without_credential_redirects_with_danger_flash() {
    let server = test_server(MockInference::unconfigured());

    let response = server
        .post("/ask")
        .form(&[("question", "any deals?")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    let location = response.header("location");
    let location = location.to_str().expect("location header");
    assert!(location.contains("level=danger"));
}
