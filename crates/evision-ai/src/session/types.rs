//! Controller policy and submit results.

use std::time::Duration;

use crate::Turn;

/// Prefix of the model turn recorded when a request fails.
pub const ERROR_PREFIX: &str = "⚠️ Error: ";

/// How the controller builds and bounds each request.
#[derive(Debug, Clone)]
pub struct ChatPolicy {
    pub context_window: usize,
    pub pin_system_instruction: bool,
    pub request_timeout: Duration,
}

impl Default for ChatPolicy {
    fn default() -> Self {
        Self {
            context_window: 8,
            pin_system_instruction: false,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// What one `submit` did to the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing was appended and no request was made.
    Ignored,
    /// The model answered; this is the appended model turn.
    Replied(Turn),
    /// The request failed; this is the appended error turn.
    Failed(Turn),
}

impl SubmitOutcome {
    pub fn turn(&self) -> Option<&Turn> {
        match self {
            Self::Ignored => None,
            Self::Replied(turn) | Self::Failed(turn) => Some(turn),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ignored => "ignored",
            Self::Replied(_) => "replied",
            Self::Failed(_) => "failed",
        }
    }
}
