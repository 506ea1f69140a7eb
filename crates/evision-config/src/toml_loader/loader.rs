//! Reading `config.toml` into an [`EvisionConfig`].

use std::path::Path;

use evision_common::ConfigError;
use tracing::{info, warn};

use crate::schema::EvisionConfig;
use crate::validation;

use super::paths::{create_default_config, default_config_path};

/// Parse the TOML file at `path`. Missing keys take their defaults.
///
/// Out-of-range values only produce a warning here; [`crate::load_config`]
/// is the strict entry point.
pub fn load_from_path(path: &Path) -> Result<EvisionConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: EvisionConfig = toml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!("invalid TOML in {}: {e}", path.display()))
    })?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "Config has invalid values: {e}");
    }

    info!(path = %path.display(), "Config loaded");
    Ok(config)
}

/// Load from [`default_config_path`], writing the documented default file
/// first if there is none.
pub fn load_default() -> Result<EvisionConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(EvisionConfig::default())
        }
        other => other,
    }
}
