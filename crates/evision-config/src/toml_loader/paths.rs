//! Where `config.toml` lives, and writing the documented default there.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use evision_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Environment variable naming a config file to use instead of the
/// platform default.
pub const CONFIG_PATH_ENV: &str = "EVISION_CONFIG";

/// `$EVISION_CONFIG` if set, else `<config dir>/evision/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(std::env::var_os(CONFIG_PATH_ENV), dirs::config_dir())
}

pub(crate) fn resolve_config_path(
    env_override: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    config_dir
        .map(|dir| dir.join("evision").join("config.toml"))
        .ok_or_else(|| {
            ConfigError::ParseError(format!(
                "no platform config directory; set {CONFIG_PATH_ENV} or pass --config"
            ))
        })
}

/// Write the commented default config to `path`, creating parent
/// directories. An existing file is left untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err("create directory for", e))?;
    }

    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(()),
        Err(e) => return Err(io_err("create", e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_err("write", e))?;

    info!(path = %path.display(), "Wrote default config");
    Ok(())
}
