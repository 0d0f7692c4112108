//! HTTP route handlers for the phia server.

pub mod chat;
pub mod summary;

use axum::Json;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

/// Service banner listing the available endpoints.
pub async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "PHIA API Server is running!",
        "endpoints": {
            "health": "/api/health/summary",
            "chat": "/api/chat",
            "status": "/api/status"
        }
    }))
}
