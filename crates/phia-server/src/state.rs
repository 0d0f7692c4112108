//! Shared server state injected into every handler.

use std::sync::Arc;

use phia_agent::HealthAgent;
use phia_engine::ResponseEngine;
use phia_metrics::MetricsStore;

/// Process-wide server context: the startup metrics snapshot, the canned
/// response engine, and an optional external agent. Constructed once in
/// `main` and passed to handlers via axum `State` rather than read from
/// globals.
pub struct ServerState {
    pub metrics: MetricsStore,
    pub engine: ResponseEngine,
    pub agent: Option<Arc<dyn HealthAgent>>,
}

impl ServerState {
    pub fn new(
        metrics: MetricsStore,
        engine: ResponseEngine,
        agent: Option<Arc<dyn HealthAgent>>,
    ) -> Self {
        Self { metrics, engine, agent }
    }

    /// Label for the status endpoint: which path answers chat requests.
    pub fn agent_mode(&self) -> &'static str {
        if self.agent.is_some() {
            "available"
        } else {
            "fallback"
        }
    }
}
