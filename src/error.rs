//! Error types for cachedcarthage
//!
//! All modules use `Result<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cachedcarthage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a single Carthage execution.
///
/// Carries the standard error captured while the command ran so the retry
/// policy can look for transient network phrases in it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{failure}")]
pub struct RunnerError {
    /// Raw stderr text captured during execution
    pub output: String,
    /// Underlying failure (usually the exit status)
    pub failure: String,
}

impl RunnerError {
    pub fn new(output: impl Into<String>, failure: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            failure: failure.into(),
        }
    }

    /// Check the captured output against a set of lower-case phrases
    pub fn matches_any(&self, phrases: &[String]) -> bool {
        let output = self.output.to_lowercase();
        phrases
            .iter()
            .any(|phrase| output.contains(&phrase.to_lowercase()))
    }
}

/// All errors that can occur in cachedcarthage
#[derive(Error, Debug)]
pub enum Error {
    // Input errors
    #[error("no Carthage command specified")]
    MissingCommand,

    #[error("failed to shell split Carthage options ({options}): {reason}")]
    OptionsSplit { options: String, reason: String },

    #[error("invalid settings at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("failed to resolve xcconfig file {input}: {reason}")]
    XcconfigResolve { input: String, reason: String },

    // Project state errors
    #[error("{} is empty", .0.display())]
    EmptyManifest(PathBuf),

    // Cache errors
    #[error("failed to determine cache paths: {0}")]
    CachePaths(String),

    #[error("failed to commit cache paths: {0}")]
    CacheCommit(String),

    // Toolchain errors
    #[error("failed to parse `$ carthage version` output: {0}")]
    CarthageVersion(String),

    // Process errors
    #[error("command failed to start: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command execution error: {command}, output: {output}")]
    CommandExecution { command: String, output: String },

    /// A single Carthage attempt failed
    #[error(transparent)]
    Runner(#[from] RunnerError),

    /// Carthage failed after the retry policy gave up
    #[error("Carthage command failed, error: {0}")]
    CarthageCommand(#[source] RunnerError),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a command execution error
    pub fn command_exec(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self::CommandExecution {
            command: command.into(),
            output: output.into(),
        }
    }

    /// Check if the error is a Carthage failure caused by a transient
    /// network condition
    pub fn is_retryable(&self, failure_phrases: &[String]) -> bool {
        match self {
            Self::Runner(err) => err.matches_any(failure_phrases),
            _ => false,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingCommand => {
                Some("Set carthage_command (or pass --carthage-command), e.g. bootstrap")
            }
            Self::EmptyManifest(_) => {
                Some("Run `carthage update` locally and commit a non-empty Cartfile.resolved")
            }
            Self::CarthageVersion(_) => Some("Make sure Carthage is installed: brew install carthage"),
            _ => None,
        }
    }
}
