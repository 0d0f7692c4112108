//! Core domain types and error definitions for phia.
//!
//! This crate provides the fundamental types shared across the phia service:
//!
//! - [`AgentError`] — Error type for external agent operations
//! - [`MetricsSnapshot`] — The health indicators shown to the user and
//!   interpolated into chat responses
//!
//! # Example
//!
//! ```rust
//! use phia_core::MetricsSnapshot;
//!
//! let snapshot = MetricsSnapshot::default();
//! assert_eq!(snapshot.heart_rate_bpm, 72);
//! assert_eq!(snapshot.sleep_duration, "7.2h");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when delegating to an external health agent.
#[derive(Error, Debug)]
pub enum AgentError {
    /// The agent endpoint could not be reached or timed out.
    #[error("agent unavailable: {0}")]
    AgentUnavailable(String),

    /// The agent responded, but the reply could not be interpreted.
    #[error("invalid agent reply: {0}")]
    InvalidReply(String),
}

impl From<serde_json::Error> for AgentError {
    fn from(err: serde_json::Error) -> Self {
        AgentError::InvalidReply(err.to_string())
    }
}

/// A point-in-time summary of the user's health metrics.
///
/// Captured once at startup and read-only afterwards. The serde renames
/// match the JSON contract consumed by the dashboard frontend
/// (`heartRate`, `steps`, `sleep`, `activeMinutes`, `calories`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Resting heart rate in beats per minute.
    #[serde(rename = "heartRate")]
    pub heart_rate_bpm: u32,

    /// Step count for the current day.
    #[serde(rename = "steps")]
    pub steps_today: u32,

    /// Sleep duration formatted as hours with one decimal, e.g. `"7.2h"`.
    #[serde(rename = "sleep")]
    pub sleep_duration: String,

    /// Minutes of moderate-or-better activity today.
    #[serde(rename = "activeMinutes")]
    pub active_minutes: u32,

    /// Calories burned today.
    #[serde(rename = "calories")]
    pub calories_today: u32,
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self {
            heart_rate_bpm: 72,
            steps_today: 8542,
            sleep_duration: "7.2h".to_string(),
            active_minutes: 45,
            calories_today: 2100,
        }
    }
}
