//! The conversation controller: submit a user message against a session.

use std::sync::Arc;

use evision_common::new_correlation_id;
use tracing::{debug, info, warn};

use crate::{send_with_timeout, AiClient, Turn};

use super::manager::Session;
use super::types::{ChatPolicy, SubmitOutcome, ERROR_PREFIX};

/// Drives chat sessions against one model client.
#[derive(Clone)]
pub struct Conversation {
    client: Arc<dyn AiClient>,
    policy: ChatPolicy,
}

impl Conversation {
    pub fn new(client: Arc<dyn AiClient>, policy: ChatPolicy) -> Self {
        Self { client, policy }
    }

    pub fn policy(&self) -> &ChatPolicy {
        &self.policy
    }

    /// Append `user_text`, ask the model, and append its answer.
    ///
    /// Blank input is a no-op. Failures never escape: they become a model
    /// turn carrying the error text. Concurrent calls on one session are
    /// serialized, so each user turn is directly followed by its reply.
    pub async fn submit(&self, session: &Session, user_text: &str) -> SubmitOutcome {
        if user_text.trim().is_empty() {
            debug!(session = %session.id(), "Ignoring blank message");
            return SubmitOutcome::Ignored;
        }

        let _flight = session.flight.lock().await;
        session.touch();
        let request_id = new_correlation_id();

        let window = {
            let mut transcript = session.transcript.write().await;
            transcript.push(Turn::user(user_text));
            transcript.window(self.policy.context_window, self.policy.pin_system_instruction)
        };

        debug!(
            session = %session.id(),
            request = %request_id,
            window = window.len(),
            "Sending chat request"
        );

        let outcome = match send_with_timeout(
            self.client.as_ref(),
            &window,
            self.policy.request_timeout,
        )
        .await
        {
            Ok(response) => {
                info!(
                    session = %session.id(),
                    request = %request_id,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "Chat reply received"
                );
                SubmitOutcome::Replied(Turn::model(response.text))
            }
            Err(e) => {
                warn!(session = %session.id(), request = %request_id, error = %e, "Chat request failed");
                SubmitOutcome::Failed(Turn::model(format!("{ERROR_PREFIX}{e}")))
            }
        };

        if let Some(turn) = outcome.turn() {
            session.transcript.write().await.push(turn.clone());
        }
        session.touch();
        outcome
    }
}
