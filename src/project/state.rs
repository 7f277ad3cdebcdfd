//! Snapshot of a cached Carthage project

use std::fmt;

/// Observable facts about a project's cache artifacts at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectState {
    pub build_output_non_empty: bool,

    pub cache_indicator_exists: bool,
    /// Raw indicator bytes, empty when missing
    pub cache_indicator_content: Vec<u8>,

    pub manifest_exists: bool,
    /// Raw manifest bytes, empty when missing
    pub manifest_content: Vec<u8>,

    pub cache_dir_exists: bool,
}

impl ProjectState {
    /// All artifacts a valid cache needs are present (content unchecked)
    pub fn is_intact(&self) -> bool {
        self.build_output_non_empty && self.cache_indicator_exists && self.manifest_exists
    }

    /// Classify the snapshot against the fingerprint the indicator should hold
    pub fn status(&self, expected_fingerprint: &[u8]) -> CacheStatus {
        if !self.is_intact() {
            CacheStatus::Absent
        } else if self.cache_indicator_content == expected_fingerprint {
            CacheStatus::Valid
        } else {
            CacheStatus::Stale
        }
    }
}

/// Usability of the on-disk cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// A prerequisite artifact is missing
    Absent,
    /// Artifacts exist but were built from different inputs
    Stale,
    /// Indicator matches the current toolchain and manifest
    Valid,
}

impl CacheStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "absent"),
            Self::Stale => write!(f, "stale"),
            Self::Valid => write!(f, "valid"),
        }
    }
}
