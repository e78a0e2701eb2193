//! Configuration loading
//!
//! Reads `~/.config/pokedex/config.toml`. A missing file is not an error;
//! an unreadable or invalid one falls back to defaults with a warning that
//! the UI shows in its status line.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use types::{
    ApiConfig, Config, DEFAULT_BASE_URL, DEFAULT_CATALOG_LIMIT, DEFAULT_SPRITE_BASE_URL,
};

const CONFIG_DIR: &str = "pokedex";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Loaded configuration plus an optional warning for the status line
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load config from `path`, or from the default location when None
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => return ConfigResult::default(),
        },
    };

    match read_config(&path) {
        Ok(Some(config)) => ConfigResult {
            config,
            warning: None,
        },
        Ok(None) => ConfigResult::default(),
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Ok(None) when the file does not exist
fn read_config(path: &Path) -> Result<Option<Config>, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&contents)
        .map(Some)
        .map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
