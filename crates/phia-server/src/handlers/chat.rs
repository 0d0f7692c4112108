//! Chat endpoint handler.

use std::borrow::Cow;
use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use tracing::info;

use crate::dto::{ChatRequest, ChatResponse};
use crate::error::AppError;
use crate::services;
use crate::state::ServerState;

const PREVIEW_CHARS: usize = 50;

/// First [`PREVIEW_CHARS`] characters of the message for logging, marked
/// with an ellipsis only when the message was actually cut.
fn preview(message: &str) -> Cow<'_, str> {
    match message.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => Cow::Owned(format!("{}...", &message[..idx])),
        None => Cow::Borrowed(message),
    }
}

/// Handles `POST /api/chat`.
///
/// Empty messages are rejected before the engine or agent ever runs;
/// everything else always yields a 200 with response text.
pub async fn chat(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.message.is_empty() {
        return Err(AppError::BadRequest("no message provided".into()));
    }

    info!("Chat request: {}", preview(&req.message));

    let response = services::chat::execute_chat(&state, &req.message).await;

    Ok(Json(ChatResponse {
        response,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_messages_log_unchanged() {
        assert_eq!(preview("hello"), "hello");
        assert_eq!(preview(""), "");
    }

    #[test]
    fn boundary_length_message_is_not_marked_truncated() {
        let exact = "x".repeat(PREVIEW_CHARS);
        assert_eq!(preview(&exact), exact.as_str());
    }

    #[test]
    fn long_messages_are_cut_with_ellipsis() {
        let long = "x".repeat(PREVIEW_CHARS + 10);
        assert_eq!(preview(&long), format!("{}...", "x".repeat(PREVIEW_CHARS)));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let long = "é".repeat(PREVIEW_CHARS + 10);
        assert_eq!(preview(&long), format!("{}...", "é".repeat(PREVIEW_CHARS)));
    }
}
