//! AI engine for EVision.
//!
//! Provides:
//! - the `AiClient` seam and a Gemini implementation
//! - per-session transcripts with a bounded context window
//! - the conversation controller that turns every remote failure into a
//!   visible transcript entry
//! - the one-shot innovation-score analysis

pub mod gemini;
pub mod innovation;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

use std::time::Duration;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use innovation::{
    analyze_one_shot, ScoreAnalyst, ScoreComponent, ScoreRequestError, RUBRIC, SUGGESTED_BRANDS,
};
pub use session::{ChatPolicy, Conversation, Session, SessionRegistry, SubmitOutcome, Transcript};

#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, turns: &[Turn]) -> Result<AiResponse, RemoteError>;
}

/// Call `client` and fail with [`RemoteError::Timeout`] if it has not
/// answered within `timeout`.
pub async fn send_with_timeout(
    client: &dyn AiClient,
    turns: &[Turn],
    timeout: Duration,
) -> Result<AiResponse, RemoteError> {
    match tokio::time::timeout(timeout, client.send_message(turns)).await {
        Ok(result) => result,
        Err(_) => Err(RemoteError::Timeout(timeout)),
    }
}

/// One role-tagged utterance.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, text)
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Model,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub text: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Everything that can go wrong talking to the model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("network error: {0}")]
    Network(String),
    #[error("authentication failed: {0}")]
    Unauthorized(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}
