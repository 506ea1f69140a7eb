//! In-memory `AiClient` used by the unit tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::{AiClient, AiResponse, RemoteError, Role, TokenUsage, Turn};

enum Reply {
    Text(String),
    Echo,
    Fail(RemoteError),
}

pub(crate) struct StubClient {
    reply: Reply,
    delay: Option<Duration>,
    calls: Mutex<Vec<Vec<Turn>>>,
}

impl StubClient {
    pub(crate) fn replying(text: &str) -> Self {
        Self::with_reply(Reply::Text(text.to_string()))
    }

    /// Answers `re: <last user text>`.
    pub(crate) fn echoing() -> Self {
        Self::with_reply(Reply::Echo)
    }

    pub(crate) fn failing(err: RemoteError) -> Self {
        Self::with_reply(Reply::Fail(err))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every window the client was called with, oldest first.
    pub(crate) fn calls(&self) -> Vec<Vec<Turn>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiClient for StubClient {
    async fn send_message(&self, turns: &[Turn]) -> Result<AiResponse, RemoteError> {
        self.calls.lock().unwrap().push(turns.to_vec());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let text = match &self.reply {
            Reply::Text(text) => text.clone(),
            Reply::Echo => {
                let last_user = turns
                    .iter()
                    .rev()
                    .find(|t| t.role == Role::User)
                    .map(|t| t.text.as_str())
                    .unwrap_or_default();
                format!("re: {last_user}")
            }
            Reply::Fail(err) => return Err(err.clone()),
        };

        Ok(AiResponse {
            text,
            usage: TokenUsage {
                input_tokens: 10,
                output_tokens: 5,
            },
        })
    }
}
