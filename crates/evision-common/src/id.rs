use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Short hex id used to tie together the log lines of one request.
pub fn new_correlation_id() -> String {
    let mut simple = Uuid::new_v4().simple().to_string();
    simple.truncate(8);
    simple
}

/// Identifier of one chat session: a random v4 UUID, serialized as its
/// hyphenated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a client-supplied id. Surrounding whitespace and upper case
    /// are tolerated; anything that is not a UUID is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}
