//! HTTP error responses for the chat API.
//!
//! The service surfaces exactly one client error: an empty chat message,
//! rejected before the engine or agent runs. Everything downstream of
//! validation recovers internally (agent failures fall back to the canned
//! engine), so no other status mapping exists.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors returned to HTTP clients.
#[derive(Debug)]
pub enum AppError {
    /// Request validation failed; body carries an explanatory message.
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::BadRequest(message) = self;
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
    }
}
