//! HTTP server entry point.
//!
//! Reads configuration from the environment, seeds the metrics store once
//! from the wearable summary CSV, optionally wires the external agent,
//! and starts the Axum server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use phia_agent::{HealthAgent, RemoteAgent};
use phia_engine::ResponseEngine;
use phia_metrics::MetricsStore;
use phia_server::{create_router, ServerState};
use tracing::info;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_SUMMARY_CSV: &str = "synthetic_wearable_users/summary_df_465.csv";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let state = Arc::new(init_server_state());

    let port = std::env::var("PHIA_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = format!("0.0.0.0:{port}");

    let app = create_router(state);

    info!("Starting server on {}", addr);
    info!("Health summary: http://localhost:{}/api/health/summary", port);
    info!("Chat endpoint:  POST http://localhost:{}/api/chat", port);
    info!("Status:         http://localhost:{}/api/status", port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initializes the server state: seeds metrics from the summary CSV and
/// wires the external agent when an endpoint is configured.
fn init_server_state() -> ServerState {
    let csv_path = std::env::var("PHIA_SUMMARY_CSV")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SUMMARY_CSV));
    let metrics = MetricsStore::initialize(Some(&csv_path));

    let agent: Option<Arc<dyn HealthAgent>> = match std::env::var("PHIA_AGENT_URL") {
        Ok(url) if !url.is_empty() => {
            info!("External agent configured at {}", url);
            Some(Arc::new(RemoteAgent::new(url)))
        }
        _ => {
            info!("No agent configured, chat runs in fallback mode");
            None
        }
    };

    ServerState::new(metrics, ResponseEngine::new(), agent)
}
