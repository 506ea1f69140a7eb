//! EVision configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use evision_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{EvisionConfig, LogLevel, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use evision_common::ConfigError;

/// Load and validate the config.
///
/// With `path` set, that file must exist. Without it, `config.toml` is read
/// from the OS config directory and a documented default is created if none
/// exists.
pub fn load_config(path: Option<&Path>) -> Result<EvisionConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string with the API key redacted.
pub fn config_to_json(config: &EvisionConfig) -> String {
    let mut redacted = config.clone();
    if redacted.gemini.api_key.is_some() {
        redacted.gemini.api_key = Some("[REDACTED]".into());
    }
    serde_json::to_string_pretty(&redacted)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = EvisionConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"gemini\""));
        assert!(json.contains("\"chat\""));
        assert!(json.contains("\"server\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_to_json_redacts_api_key() {
        let mut config = EvisionConfig::default();
        config.gemini.api_key = Some("AIza-secret".into());
        let json = config_to_json(&config);
        assert!(!json.contains("AIza-secret"));
        assert!(json.contains("[REDACTED]"));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = EvisionConfig::default();
        let json = config_to_json(&config);
        let parsed: EvisionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.gemini.model, "gemini-2.5-flash");
        assert_eq!(parsed.chat.context_window, 8);
        assert_eq!(parsed.server.port, 8501);
    }

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\ncontext_window = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_with_explicit_missing_path_fails() {
        let err = load_config(Some(Path::new("/tmp/evision_missing_config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
