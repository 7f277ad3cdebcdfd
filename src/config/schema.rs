//! Settings file schema
//!
//! Every section is optional; missing keys keep their defaults.

use crate::project::ProjectLayout;
use crate::runner::{RetryPolicy, RunnerSettings};
use serde::{Deserialize, Serialize};

/// Root settings structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cache behaviour
    pub cache: CacheConfig,

    /// Retry of transient network failures
    pub retry: RetryPolicy,

    /// File and directory names of the cache layout
    pub layout: ProjectLayout,
}

impl Settings {
    /// Runner constants derived from these settings
    pub fn runner_settings(&self) -> RunnerSettings {
        RunnerSettings {
            cache_command: self.cache.command.clone(),
            retry: self.retry.clone(),
        }
    }
}

/// Cache settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Carthage subcommand whose output is cached
    pub command: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            command: "bootstrap".to_string(),
        }
    }
}
