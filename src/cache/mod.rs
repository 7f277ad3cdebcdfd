//! Best-effort Carthage dependency cache
//!
//! The cache is the project's `Carthage/` directory, persisted between
//! builds by an external cache transport. A cache indicator file inside it
//! records the fingerprint (Swift version + resolved manifest) the build
//! output was produced from.
//!
//! # Cache States
//!
//! | State | Available | Description |
//! |-------|-----------|-------------|
//! | Absent | no | Build output, indicator or manifest missing |
//! | Stale | no | Indicator written for other inputs |
//! | Valid | yes | Indicator matches current inputs |
//!
//! After a successful bootstrap the indicator is rewritten and committed
//! regardless of the previous state.

pub mod engine;
pub mod fingerprint;
pub mod transport;

pub use engine::{CacheEngine, CarthageCache};
pub use fingerprint::{compute_fingerprint, fingerprint_for};
pub use transport::{CacheTransport, EnvmanTransport};
