//! Health summary and status endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use phia_core::MetricsSnapshot;

use crate::dto::StatusResponse;
use crate::state::ServerState;

/// Handles `GET /api/health/summary`: the startup snapshot with the
/// dashboard's field names.
pub async fn summary(State(state): State<Arc<ServerState>>) -> Json<MetricsSnapshot> {
    Json(state.metrics.current().clone())
}

/// Handles `GET /api/status`.
pub async fn status(State(state): State<Arc<ServerState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running",
        agent: state.agent_mode(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
