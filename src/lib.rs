//! cachedcarthage - Carthage with a dependency cache
//!
//! Skips `carthage bootstrap` when the Carthage/Build output restored by
//! the CI cache was built from the same Swift version and
//! Cartfile.resolved, and retries Carthage on transient network failures.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod project;
pub mod runner;
pub mod toolchain;
pub mod ui;
pub mod xcconfig;


pub use error::{Error, Result, RunnerError};
