//! Path arithmetic for a Carthage project

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File and directory names making up the cache layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLayout {
    /// Cache root, relative to the project root
    pub cache_dir: String,

    /// Build output, relative to the cache root
    pub build_dir: String,

    /// Cache indicator file, relative to the cache root
    pub indicator_file: String,

    /// Resolved manifest, relative to the project root
    pub manifest_file: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            cache_dir: "Carthage".to_string(),
            build_dir: "Build".to_string(),
            indicator_file: "Cachefile".to_string(),
            manifest_file: "Cartfile.resolved".to_string(),
        }
    }
}

/// A Carthage project rooted at a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
    layout: ProjectLayout,
}

impl Project {
    /// Create a project with the default layout
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_layout(root, ProjectLayout::default())
    }

    /// Create a project with a custom layout
    pub fn with_layout(root: impl Into<PathBuf>, layout: ProjectLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// `<root>/Carthage`
    pub fn cache_dir(&self) -> PathBuf {
        self.root.join(&self.layout.cache_dir)
    }

    /// `<root>/Carthage/Cachefile`
    pub fn cache_indicator_file(&self) -> PathBuf {
        self.cache_dir().join(&self.layout.indicator_file)
    }

    /// `<root>/Carthage/Build`
    pub fn build_output_dir(&self) -> PathBuf {
        self.cache_dir().join(&self.layout.build_dir)
    }

    /// `<root>/Cartfile.resolved`
    pub fn manifest_file(&self) -> PathBuf {
        self.root.join(&self.layout.manifest_file)
    }

    /// Name of the manifest file, as used in the fingerprint
    pub fn manifest_name(&self) -> &str {
        &self.layout.manifest_file
    }
}
