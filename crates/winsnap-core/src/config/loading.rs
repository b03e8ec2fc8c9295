use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::errors::ConfigError;
use super::types::WinsnapConfig;

const CONFIG_ENV: &str = "WINSNAP_CONFIG";

/// Location of the user config file.
///
/// `$WINSNAP_CONFIG` wins; otherwise `<config_dir>/winsnap/config.toml`,
/// falling back to `./.winsnap/config.toml` without a config directory.
pub fn config_file_path() -> PathBuf {
    if let Ok(path_str) = std::env::var(CONFIG_ENV)
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("winsnap").join("config.toml"),
        None => {
            debug!(
                event = "core.config.config_dir_not_found",
                fallback = ".winsnap"
            );
            PathBuf::from(".").join(".winsnap").join("config.toml")
        }
    }
}

/// Load the user config, using defaults when no file exists.
pub fn load_config() -> Result<WinsnapConfig, ConfigError> {
    load_config_from(&config_file_path())
}

pub fn load_config_from(path: &Path) -> Result<WinsnapConfig, ConfigError> {
    if !path.exists() {
        debug!(
            event = "core.config.file_missing",
            path = %path.display()
        );
        return Ok(WinsnapConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: WinsnapConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    config.validate()?;

    info!(
        event = "core.config.load_completed",
        path = %path.display()
    );
    Ok(config)
}
