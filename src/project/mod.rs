//! Carthage project on disk
//!
//! Locates the cache artifacts of a project and takes read-only snapshots
//! of their state.
//!
//! # Layout
//!
//! | Path | Role |
//! |------|------|
//! | `Carthage/` | cache root, persisted by the cache transport |
//! | `Carthage/Build/` | Carthage build output, must be non-empty |
//! | `Carthage/Cachefile` | cache indicator holding the fingerprint |
//! | `Cartfile.resolved` | resolved manifest, fingerprint input |

pub mod locator;
pub mod provider;
pub mod state;

pub use locator::{Project, ProjectLayout};
pub use provider::{FsStateProvider, StateProvider};
pub use state::{CacheStatus, ProjectState};
