//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive scoped to the evision crates.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Trace => "evision=trace,evision_ai=trace,evision_config=trace",
            Self::Debug => "evision=debug,evision_ai=debug,evision_config=debug",
            Self::Info => "evision=info,evision_ai=info,evision_config=info",
            Self::Warn => "evision=warn,evision_ai=warn,evision_config=warn",
            Self::Error => "evision=error,evision_ai=error,evision_config=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
