//! External health agent boundary.
//!
//! The chat endpoint can delegate to an opaque external agent before
//! falling back to the local response engine. This crate defines the
//! [`HealthAgent`] trait, the tagged [`AgentStep`] reply model, and an
//! HTTP client implementation for agents reachable over the network.
//!
//! Replies are a tagged union rather than a bag of optional fields:
//! intermediate reasoning arrives as [`AgentStep::Progress`] and the
//! answer as [`AgentStep::Final`], so callers never probe for attributes
//! that may or may not exist.

use std::time::Duration;

use async_trait::async_trait;
use phia_core::AgentError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

const AGENT_TIMEOUT: Duration = Duration::from_secs(30);

/// One step of an agent run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentStep {
    /// An in-progress observation; not yet an answer.
    Progress { observation: String },
    /// The agent's final answer.
    Final { answer: String },
}

/// Full reply from an agent invocation, in execution order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentReply {
    #[serde(default)]
    pub steps: Vec<AgentStep>,
}

impl AgentReply {
    /// The text to show the user: the last final answer, or the last
    /// progress observation when the agent never finished. `None` means
    /// the reply carried no usable text and the caller should fall back.
    pub fn resolved_text(&self) -> Option<&str> {
        let mut last_observation = None;
        for step in self.steps.iter().rev() {
            match step {
                AgentStep::Final { answer } if !answer.is_empty() => return Some(answer.as_str()),
                AgentStep::Progress { observation }
                    if last_observation.is_none() && !observation.is_empty() =>
                {
                    last_observation = Some(observation.as_str());
                }
                _ => {}
            }
        }
        last_observation
    }
}

/// An agent the chat flow can delegate to. Implementations may fail;
/// the caller is responsible for falling back to the response engine.
#[async_trait]
pub trait HealthAgent: Send + Sync {
    async fn invoke(&self, message: &str) -> Result<AgentReply, AgentError>;
}

#[derive(Debug, Serialize)]
struct AgentRequest<'a> {
    message: &'a str,
}

/// Agent reachable over HTTP: POSTs the message as JSON and expects an
/// [`AgentReply`] body.
pub struct RemoteAgent {
    client: Client,
    endpoint: String,
}

impl RemoteAgent {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { client: Client::new(), endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl HealthAgent for RemoteAgent {
    async fn invoke(&self, message: &str) -> Result<AgentReply, AgentError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AgentRequest { message })
            .timeout(AGENT_TIMEOUT)
            .send()
            .await
            .map_err(|e| AgentError::AgentUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::AgentUnavailable(format!(
                "agent returned {status}"
            )));
        }

        let reply: AgentReply = response
            .json()
            .await
            .map_err(|e| AgentError::InvalidReply(e.to_string()))?;

        info!("Agent replied with {} steps", reply.steps.len());
        Ok(reply)
    }
}
