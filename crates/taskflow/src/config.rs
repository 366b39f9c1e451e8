//! CLI configuration: where the task store lives.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings read from `config.toml` under the user config directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Directory holding the task store files.
    pub store_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load the configuration from the default location, falling back
    /// to defaults when no file exists.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        dirs::config_dir()
            .map(|dir| dir.join("taskflow").join("config.toml"))
            .map_or_else(|| Ok(Self::default()), |path| Self::load_from(&path))
    }

    /// Load the configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

/// Pick the store directory: command-line flag, then `TASKFLOW_STORE`,
/// then the config file, then the user data directory.
///
/// # Errors
/// Returns an error when no candidate directory can be determined.
pub fn resolve_store_dir(flag: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os("TASKFLOW_STORE") {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = &config.store_dir {
        return Ok(dir.clone());
    }
    dirs::data_dir()
        .map(|dir| dir.join("taskflow"))
        .ok_or_else(|| anyhow!("could not determine a data directory; pass --store"))
}
