//! Gemini API client configuration.

use std::time::Duration;

use crate::RemoteError;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub base_url: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-2.5-flash".to_string(),
            max_tokens: 4096,
            temperature: 0.7,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// Create config from the environment.
    ///
    /// Resolution order:
    /// 1. `GEMINI_API_KEY`
    /// 2. `GOOGLE_API_KEY`
    pub fn from_env() -> Result<Self, RemoteError> {
        ["GEMINI_API_KEY", "GOOGLE_API_KEY"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|key| !key.trim().is_empty())
            .map(|key| Self::new(key.trim()))
            .ok_or_else(|| {
                RemoteError::Unauthorized(
                    "Gemini API not configured. Set GEMINI_API_KEY or gemini.api_key.".into(),
                )
            })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Point the client at a different endpoint root (proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
