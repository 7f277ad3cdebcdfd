//! Filesystem probing for project state
//!
//! A missing artifact is a normal "no cache yet" condition and is reported
//! through the snapshot, not as an error. Only artifacts that exist but
//! cannot be read (or an empty resolved manifest) fail the probe.

use crate::error::{Error, Result};
use crate::project::{Project, ProjectState};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Source of project state snapshots
#[async_trait]
pub trait StateProvider: Send + Sync {
    /// Take a fresh snapshot of the project's cache artifacts
    async fn parse_state(&self, project: &Project) -> Result<ProjectState>;
}

/// Reads project state straight from disk, every call
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStateProvider;

impl FsStateProvider {
    pub fn new() -> Self {
        Self
    }

    async fn build_output_non_empty(dir: &Path) -> bool {
        let mut entries = match fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) => {
                debug!("{} not readable: {}", dir.display(), e);
                return false;
            }
        };

        matches!(entries.next_entry().await, Ok(Some(_)))
    }

    async fn path_exists(path: &Path) -> Result<bool> {
        fs::try_exists(path)
            .await
            .map_err(|e| Error::io(format!("checking if {} exists", path.display()), e))
    }

    /// `(exists, raw bytes)` of an optional file
    async fn optional_file(path: &Path) -> Result<(bool, Vec<u8>)> {
        if !Self::path_exists(path).await? {
            return Ok((false, Vec::new()));
        }

        let content = fs::read(path)
            .await
            .map_err(|e| Error::io(format!("reading {}", path.display()), e))?;

        Ok((true, content))
    }
}

#[async_trait]
impl StateProvider for FsStateProvider {
    async fn parse_state(&self, project: &Project) -> Result<ProjectState> {
        let build_output_non_empty = Self::build_output_non_empty(&project.build_output_dir()).await;

        let (cache_indicator_exists, cache_indicator_content) =
            Self::optional_file(&project.cache_indicator_file()).await?;

        let manifest_file = project.manifest_file();
        let (manifest_exists, manifest_content) = Self::optional_file(&manifest_file).await?;
        if manifest_exists && manifest_content.is_empty() {
            return Err(Error::EmptyManifest(manifest_file));
        }

        let cache_dir_exists = Self::path_exists(&project.cache_dir()).await?;

        Ok(ProjectState {
            build_output_non_empty,
            cache_indicator_exists,
            cache_indicator_content,
            manifest_exists,
            manifest_content,
            cache_dir_exists,
        })
    }
}
