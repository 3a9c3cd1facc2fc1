pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

const CONFIG_FILE_NAME: &str = ".chartgate.toml";

/// Get the global config file path (~/.chartgate.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (./.chartgate.toml)
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Load configuration from file or use defaults.
///
/// An explicitly requested file must exist and parse. Discovered files
/// (working directory first, then home) fall back to defaults when missing
/// or unreadable.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)?;
        return toml::from_str(&content).map_err(|e| {
            ConfigError::ParsingFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        });
    }

    // Try local config first
    let local = local_config_path(Path::new("."));
    if local.exists() {
        if let Ok(content) = fs::read_to_string(&local) {
            if let Ok(config) = toml::from_str(&content) {
                return Ok(config);
            }
        }
    }

    // Try global config
    if let Some(global) = global_config_path() {
        if global.exists() {
            if let Ok(content) = fs::read_to_string(&global) {
                if let Ok(config) = toml::from_str(&content) {
                    return Ok(config);
                }
            }
        }
    }

    Ok(types::Config::default())
}
