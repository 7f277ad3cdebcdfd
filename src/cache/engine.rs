//! Cache availability and indicator lifecycle

use crate::cache::fingerprint::fingerprint_for;
use crate::cache::transport::CacheTransport;
use crate::error::{Error, Result};
use crate::project::{CacheStatus, Project, StateProvider};
use async_trait::async_trait;
use std::path::{self, Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Cache operations the runner depends on
#[async_trait]
pub trait CarthageCache: Send + Sync {
    /// Whether the on-disk build output can be reused
    async fn is_available(&self) -> Result<bool>;

    /// Write the cache indicator for the current inputs
    async fn create_indicator(&self) -> Result<()>;

    /// Hand the cache directory to the cache transport
    async fn commit(&self) -> Result<()>;
}

/// Default [`CarthageCache`] backed by a state provider and a transport
pub struct CacheEngine {
    project: Project,
    swift_version: String,
    state_provider: Box<dyn StateProvider>,
    transport: Box<dyn CacheTransport>,
}

impl CacheEngine {
    pub fn new(
        project: Project,
        swift_version: impl Into<String>,
        state_provider: Box<dyn StateProvider>,
        transport: Box<dyn CacheTransport>,
    ) -> Self {
        Self {
            project,
            swift_version: swift_version.into(),
            state_provider,
            transport,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Indicator content for the given manifest content
    pub fn compute_fingerprint(&self, manifest_content: &[u8]) -> Vec<u8> {
        fingerprint_for(
            &self.swift_version,
            self.project.manifest_name(),
            manifest_content,
        )
    }

    /// Classify the current on-disk cache
    pub async fn status(&self) -> Result<CacheStatus> {
        let state = self.state_provider.parse_state(&self.project).await?;

        debug!(
            "Cache state: build output non-empty: {}, indicator: {}, manifest: {}",
            state.build_output_non_empty, state.cache_indicator_exists, state.manifest_exists
        );

        if !state.build_output_non_empty {
            info!("{} is missing or empty", self.project.build_output_dir().display());
        }

        let layout = self.project.layout();
        if !state.cache_indicator_exists && state.manifest_exists {
            warn!(
                "The {} is generated by this tool. The cache is probably not initialised yet (the first cache push initialises it)",
                layout.indicator_file
            );
        }
        if !state.manifest_exists {
            warn!(
                "No {} found at: {}",
                layout.manifest_file,
                self.project.manifest_file().display()
            );
            warn!(
                "Make sure it is committed into your repository. Dependencies will not be cached until {} is present",
                layout.manifest_file
            );
        }

        let expected = self.compute_fingerprint(&state.manifest_content);
        let status = state.status(&expected);

        if status == CacheStatus::Stale {
            debug!(
                "{} is not valid.\nExpected content:\n{}\nActual content:\n{}",
                layout.indicator_file,
                String::from_utf8_lossy(&expected),
                String::from_utf8_lossy(&state.cache_indicator_content)
            );
        }

        Ok(status)
    }

    fn absolute(path: &Path) -> Result<PathBuf> {
        path::absolute(path).map_err(|e| Error::CachePaths(format!("{}: {}", path.display(), e)))
    }
}

#[async_trait]
impl CarthageCache for CacheEngine {
    async fn is_available(&self) -> Result<bool> {
        let status = self.status().await?;
        debug!("Cache is {}", status);
        Ok(status.is_available())
    }

    async fn create_indicator(&self) -> Result<()> {
        let state = self.state_provider.parse_state(&self.project).await?;

        let cache_dir = self.project.cache_dir();
        if !state.cache_dir_exists {
            fs::create_dir_all(&cache_dir)
                .await
                .map_err(|e| Error::io(format!("creating {}", cache_dir.display()), e))?;
        }

        let indicator = self.project.cache_indicator_file();
        let content = self.compute_fingerprint(&state.manifest_content);
        fs::write(&indicator, content)
            .await
            .map_err(|e| Error::io(format!("writing {}", indicator.display()), e))?;

        info!("Cache indicator created: {}", indicator.display());
        Ok(())
    }

    async fn commit(&self) -> Result<()> {
        let cache_dir = Self::absolute(&self.project.cache_dir())?;
        let indicator = Self::absolute(&self.project.cache_indicator_file())?;

        self.transport
            .include_path(format!("{} -> {}", cache_dir.display(), indicator.display()));
        self.transport.commit().await
    }
}
