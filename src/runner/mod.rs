//! Carthage execution
//!
//! Runs one Carthage command with cache short-circuiting and retry of
//! transient network failures:
//! - `bootstrap` with a valid cache: commit the cache, skip Carthage
//! - `bootstrap` / `update`: retried when stderr looks like a network hiccup
//! - `bootstrap` success: rewrite and commit the cache indicator

mod cached;
mod command;
mod executor;
mod retry;

pub use cached::{CarthageInvocation, Runner, RunnerSettings};
pub use command::CarthageCommand;
pub use executor::{CommandExecutor, ProcessExecutor};
pub use retry::RetryPolicy;
