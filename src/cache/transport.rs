//! Hand-off of cache paths to the external cache service
//!
//! The cache service archives every path listed in the
//! `BITRISE_CACHE_INCLUDE_PATHS` environment variable at the end of the
//! build. Each entry is a `<path> -> <indicator file>` mapping: the path is
//! re-uploaded only when the indicator file changes.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::process::Stdio;
use std::sync::{Mutex, PoisonError};
use tokio::process::Command;
use tracing::debug;

/// Environment key read by the cache service
pub const CACHE_INCLUDE_PATHS_KEY: &str = "BITRISE_CACHE_INCLUDE_PATHS";

/// Persistence backend for cache paths
#[async_trait]
pub trait CacheTransport: Send + Sync {
    /// Register a `source -> indicator` mapping for the next commit
    fn include_path(&self, mapping: String);

    /// Persist every included mapping
    async fn commit(&self) -> Result<()>;
}

/// Exports include paths through `envman`
pub struct EnvmanTransport {
    program: String,
    included: Mutex<Vec<String>>,
}

impl EnvmanTransport {
    pub fn new() -> Self {
        Self::with_program("envman")
    }

    /// Use a different envman executable
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            included: Mutex::new(Vec::new()),
        }
    }

    fn included(&self) -> Vec<String> {
        self.included
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for EnvmanTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Append mappings to an existing newline separated list, skipping duplicates
pub fn merge_include_paths(existing: &str, mappings: &[String]) -> String {
    let mut lines: Vec<&str> = existing.lines().filter(|l| !l.trim().is_empty()).collect();
    for mapping in mappings {
        if !lines.contains(&mapping.as_str()) {
            lines.push(mapping);
        }
    }
    lines.join("\n")
}

#[async_trait]
impl CacheTransport for EnvmanTransport {
    fn include_path(&self, mapping: String) {
        let mut included = self.included.lock().unwrap_or_else(PoisonError::into_inner);
        if !included.contains(&mapping) {
            included.push(mapping);
        }
    }

    async fn commit(&self) -> Result<()> {
        let existing = std::env::var(CACHE_INCLUDE_PATHS_KEY).unwrap_or_default();
        let value = merge_include_paths(&existing, &self.included());

        debug!("Exporting {}: {}", CACHE_INCLUDE_PATHS_KEY, value);

        let output = Command::new(&self.program)
            .args(["add", "--key", CACHE_INCLUDE_PATHS_KEY, "--value", &value])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| Error::CacheCommit(format!("{}: {}", self.program, e)))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(Error::CacheCommit(format!(
                "{} add exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )))
        }
    }
}
