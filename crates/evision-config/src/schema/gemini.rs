use serde::{Deserialize, Serialize};

/// Default Gemini model used for chat and scoring.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Remote inference settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSection {
    /// API key. Usually left unset so `GEMINI_API_KEY` is used instead.
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Hard bound on one remote call, in seconds (valid range: 1-300).
    pub timeout_secs: u64,
    /// TCP/TLS connect timeout, in seconds (valid range: 1-60).
    pub connect_timeout_secs: u64,
}

impl std::fmt::Debug for GeminiSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSection")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl Default for GeminiSection {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.into(),
            max_tokens: 4096,
            temperature: 0.7,
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}
