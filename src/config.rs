//! Configuration loading
//!
//! Reads `~/.config/article-suggest/config.toml`. A missing file is not an
//! error; an unreadable or invalid file falls back to defaults and reports a
//! warning so startup never fails because of configuration.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{ApiConfig, Config, PlaceholderConfig, SuggestConfig};

const CONFIG_DIR: &str = "article-suggest";
const CONFIG_FILE: &str = "config.toml";

/// Result of loading configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when the file existed but could not be used
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return ConfigResult {
                config: Config::default(),
                warning: None,
            };
        }
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read {}: {}", path.display(), e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!(
                "Invalid config at {}, using defaults: {}",
                path.display(),
                e.message()
            )),
        },
    }
}
