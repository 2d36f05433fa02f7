// tests/http_api_test.rs
// Router-level tests: REST debate endpoint and SSE progress stream

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::get,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use debate_arena::api::http::{api_router, root_handler};
use debate_arena::llm::provider::{DebateProvider, ProviderError};
use debate_arena::state::AppState;

struct CannedProvider {
    name: &'static str,
    outcome: Result<&'static str, &'static str>,
}

#[async_trait]
impl DebateProvider for CannedProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        match self.outcome {
            Ok(reply) => Ok(reply.to_string()),
            Err(fault) => Err(ProviderError::new(self.name, fault)),
        }
    }
}

fn test_app(providers: Vec<Arc<dyn DebateProvider>>) -> Router {
    let app_state = Arc::new(AppState { providers });
    Router::new()
        .route("/", get(root_handler))
        .nest("/api", api_router(app_state))
}

fn canned_roster() -> Vec<Arc<dyn DebateProvider>> {
    vec![
        Arc::new(CannedProvider {
            name: "A",
            outcome: Ok("textA"),
        }),
        Arc::new(CannedProvider {
            name: "B",
            outcome: Err("socket hang up"),
        }),
        Arc::new(CannedProvider {
            name: "C",
            outcome: Ok("textC"),
        }),
    ]
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// REST endpoint
// ============================================================================

#[tokio::test]
async fn test_root_liveness() {
    let response = test_app(canned_roster())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"AI Debate API is running");
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_app(canned_roster())
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_post_debate_missing_topic_is_400() {
    let response = test_app(canned_roster())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/debate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Topic is required");
}

#[tokio::test]
async fn test_post_debate_whitespace_topic_is_400() {
    let response = test_app(canned_roster())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/debate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"topic": "   "}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_debate_returns_full_transcript() {
    let response = test_app(canned_roster())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/debate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"topic": "Is AI beneficial?"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["topic"], "Is AI beneficial?");

    let responses = json["responses"].as_array().unwrap();
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["model"], "A");
    assert_eq!(responses[0]["response"], "textA");
    assert_eq!(
        responses[1]["response"],
        "Error: Unable to generate response from B. socket hang up"
    );
    assert_eq!(responses[2]["response"], "textC");
}

// ============================================================================
// SSE stream
// ============================================================================

#[tokio::test]
async fn test_stream_missing_topic_is_plain_400() {
    let response = test_app(canned_roster())
        .oneshot(
            Request::builder()
                .uri("/api/debate/stream")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Topic is required");
}

#[tokio::test]
async fn test_stream_emits_ordered_events_and_terminates() {
    let response = test_app(canned_roster())
        .oneshot(
            Request::builder()
                .uri("/api/debate/stream?topic=Is%20AI%20beneficial%3F")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/event-stream"));

    // The stream closes after the terminal event, so collecting finishes.
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();

    let events: Vec<Value> = body
        .lines()
        .filter_map(|line| line.strip_prefix("data: "))
        .map(|data| serde_json::from_str(data).unwrap())
        .collect();

    assert_eq!(events[0]["type"], "connected");

    let first_status = events.iter().position(|e| e["type"] == "model_status");
    let complete = events.iter().position(|e| e["type"] == "complete");
    assert!(first_status.is_some(), "expected at least one model_status");
    let complete = complete.expect("expected a complete event");
    assert!(first_status.unwrap() < complete);

    // Exactly one terminal event, and nothing after it
    assert_eq!(complete, events.len() - 1);
    assert!(!events.iter().any(|e| e["type"] == "error"));

    // Stage events cover the whole roster in order
    let staged: Vec<&str> = events
        .iter()
        .filter(|e| e["type"] == "model_status")
        .map(|e| e["model"].as_str().unwrap())
        .collect();
    assert_eq!(staged, vec!["A", "B", "C"]);

    // Terminal event carries the full transcript
    let results = &events[complete]["results"];
    assert_eq!(results["topic"], "Is AI beneficial?");
    assert_eq!(results["responses"].as_array().unwrap().len(), 3);
}
