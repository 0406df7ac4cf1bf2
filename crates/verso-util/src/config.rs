use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{VersoError, VersoResult};

/// Environment variable that overrides the verso data directory.
pub const HOME_ENV: &str = "VERSO_HOME";

/// Global user configuration loaded from `~/.verso/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub resolve: ResolveConfig,
}

/// Resolution settings from `[resolve]` in global config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Version returned when the requested range is empty.
    #[serde(default, rename = "default-version")]
    pub default_version: Option<String>,

    /// Manifest file consulted when no manifest is given on the command line.
    #[serde(default)]
    pub manifest: Option<PathBuf>,
}

impl GlobalConfig {
    /// Load the global configuration from the default path, or return defaults if the file doesn't exist.
    pub fn load() -> VersoResult<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the configuration from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> VersoResult<Self> {
        if !path.is_file() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| VersoError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            VersoError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the verso data directory.
///
/// `$VERSO_HOME` wins when set; otherwise `~/.verso/`.
pub fn dirs_path() -> PathBuf {
    if let Ok(dir) = std::env::var(HOME_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".verso")
}
