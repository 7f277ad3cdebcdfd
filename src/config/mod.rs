//! Configuration management for cachedcarthage
//!
//! Step inputs come from the command line or environment (see
//! [`crate::cli::Cli`]). Tunable constants live in an optional TOML
//! settings file.

pub mod schema;

pub use schema::{CacheConfig, Settings};

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Settings file loader
pub struct ConfigManager {
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Loader that always yields the defaults
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Loader reading the given settings file
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: Some(path),
        }
    }

    /// Load settings, falling back to defaults when no file is configured
    pub async fn load(&self) -> Result<Settings> {
        match &self.config_path {
            Some(path) => self.load_from_file(path).await,
            None => {
                debug!("No settings file, using defaults");
                Ok(Settings::default())
            }
        }
    }

    /// Load settings from a specific file
    pub async fn load_from_file(&self, path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(format!("reading settings from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| Error::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get the settings file path
    pub fn path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
