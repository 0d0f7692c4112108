//! Chat execution service - agent delegation with engine fallback.

use tracing::{error, info, warn};

use crate::state::ServerState;

/// Produces the chat response text for `message`.
///
/// When an external agent is configured it is tried first; any failure or
/// a reply with no usable text falls back to the canned response engine.
/// The caller always gets text, never an error.
pub async fn execute_chat(state: &ServerState, message: &str) -> String {
    if let Some(agent) = &state.agent {
        match agent.invoke(message).await {
            Ok(reply) => {
                if let Some(text) = reply.resolved_text() {
                    info!("Answering from external agent");
                    return text.to_string();
                }
                warn!("Agent reply carried no usable text, using canned response");
            }
            Err(e) => {
                error!("Agent error, using canned response: {}", e);
            }
        }
    }

    state.engine.respond(message, state.metrics.current())
}
