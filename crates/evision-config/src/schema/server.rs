use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    /// Sessions idle for longer than this are dropped (seconds).
    pub session_idle_ttl_secs: u64,
    /// How often the idle-session reaper runs (seconds).
    pub reap_interval_secs: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8501,
            session_idle_ttl_secs: 3600,
            reap_interval_secs: 60,
        }
    }
}
