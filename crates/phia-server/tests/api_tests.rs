//! Integration tests for the phia HTTP API.
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`. Each
//! test builds its own state; no network or filesystem is involved.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use phia_agent::{AgentReply, AgentStep, HealthAgent};
use phia_core::{AgentError, MetricsSnapshot};
use phia_engine::ResponseEngine;
use phia_metrics::MetricsStore;
use phia_server::{create_router, ServerState};
use serde_json::Value;
use tower::ServiceExt;

// =============================================================================
// Helpers
// =============================================================================

/// Agent that always finishes with a fixed answer.
struct StubAgent(&'static str);

#[async_trait]
impl HealthAgent for StubAgent {
    async fn invoke(&self, _message: &str) -> Result<AgentReply, AgentError> {
        Ok(AgentReply {
            steps: vec![AgentStep::Final { answer: self.0.to_string() }],
        })
    }
}

/// Agent that always fails, forcing the engine fallback.
struct DownAgent;

#[async_trait]
impl HealthAgent for DownAgent {
    async fn invoke(&self, _message: &str) -> Result<AgentReply, AgentError> {
        Err(AgentError::AgentUnavailable("connection refused".into()))
    }
}

fn make_app(agent: Option<Arc<dyn HealthAgent>>) -> axum::Router {
    let state = ServerState::new(MetricsStore::default(), ResponseEngine::new(), agent);
    create_router(Arc::new(state))
}

fn chat_request(json: &str) -> Request<Body> {
    Request::post("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Liveness & introspection
// =============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let resp = make_app(None)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn home_lists_endpoints() {
    let resp = make_app(None)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["endpoints"]["chat"], "/api/chat");
    assert_eq!(json["endpoints"]["health"], "/api/health/summary");
}

#[tokio::test]
async fn status_reports_fallback_mode_without_agent() {
    let resp = make_app(None)
        .oneshot(Request::get("/api/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["status"], "running");
    assert_eq!(json["agent"], "fallback");
    assert!(json["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn status_reports_available_mode_with_agent() {
    let resp = make_app(Some(Arc::new(StubAgent("hi"))))
        .oneshot(Request::get("/api/status").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let json = body_json(resp).await;
    assert_eq!(json["agent"], "available");
}

// =============================================================================
// Health summary
// =============================================================================

#[tokio::test]
async fn summary_uses_dashboard_field_names() {
    let resp = make_app(None)
        .oneshot(
            Request::get("/api/health/summary")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    let defaults = MetricsSnapshot::default();
    assert_eq!(json["heartRate"], defaults.heart_rate_bpm);
    assert_eq!(json["steps"], defaults.steps_today);
    assert_eq!(json["sleep"], defaults.sleep_duration.as_str());
    assert_eq!(json["activeMinutes"], defaults.active_minutes);
    assert_eq!(json["calories"], defaults.calories_today);
}

// =============================================================================
// Chat
// =============================================================================

#[tokio::test]
async fn chat_rejects_empty_message() {
    let resp = make_app(None)
        .oneshot(chat_request(r#"{"message": ""}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = body_json(resp).await;
    assert_eq!(json["error"], "no message provided");
}

#[tokio::test]
async fn chat_rejects_missing_message_field() {
    let resp = make_app(None).oneshot(chat_request(r#"{}"#)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_answers_with_response_and_timestamp() {
    let resp = make_app(None)
        .oneshot(chat_request(r#"{"message": "how was my sleep?"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert!(json["response"].as_str().is_some_and(|r| !r.is_empty()));
    assert!(json["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn chat_interpolates_current_heart_rate() {
    let resp = make_app(None)
        .oneshot(chat_request(r#"{"message": "What's my heart rate?"}"#))
        .await
        .unwrap();

    let json = body_json(resp).await;
    let text = json["response"].as_str().unwrap();
    assert!(text.contains("72 bpm"), "expected heart rate in: {text}");
}

#[tokio::test]
async fn chat_prefers_agent_answer() {
    let resp = make_app(Some(Arc::new(StubAgent("Your sleep trend is improving."))))
        .oneshot(chat_request(r#"{"message": "how is my sleep trend?"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["response"], "Your sleep trend is improving.");
}

#[tokio::test]
async fn chat_falls_back_when_agent_is_down() {
    let resp = make_app(Some(Arc::new(DownAgent)))
        .oneshot(chat_request(r#"{"message": "What's my heart rate?"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    let text = json["response"].as_str().unwrap();
    assert!(text.contains("72 bpm"), "fallback should answer from metrics: {text}");
}

#[tokio::test]
async fn chat_falls_back_when_agent_reply_is_empty() {
    struct EmptyAgent;

    #[async_trait]
    impl HealthAgent for EmptyAgent {
        async fn invoke(&self, _message: &str) -> Result<AgentReply, AgentError> {
            Ok(AgentReply::default())
        }
    }

    let resp = make_app(Some(Arc::new(EmptyAgent)))
        .oneshot(chat_request(r#"{"message": "tell me something"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert!(json["response"].as_str().is_some_and(|r| !r.is_empty()));
}
