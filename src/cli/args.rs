//! CLI argument definitions using clap derive
//!
//! Every input can also be given through the environment variable a CI
//! step would export.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// cachedcarthage - Carthage with a dependency cache
///
/// Runs a Carthage command, reusing the Carthage/Build output from a
/// previous build when it was made from the same Swift version and
/// Cartfile.resolved, and retrying transient network failures.
#[derive(Parser, Debug)]
#[command(name = "cachedcarthage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Carthage subcommand to run (bootstrap, update, build, ...)
    #[arg(long, env = "carthage_command")]
    pub carthage_command: Option<String>,

    /// Options passed to the Carthage subcommand, shell-quoted
    #[arg(long, env = "carthage_options", default_value = "", allow_hyphen_values = true)]
    pub carthage_options: String,

    /// GitHub access token, used to avoid API rate limits
    #[arg(long, env = "github_access_token", hide_env_values = true)]
    pub github_access_token: Option<String>,

    /// Project root (defaults to current directory)
    #[arg(long, env = "BITRISE_SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Extra xcconfig file: local path, file:// or http(s):// URL
    #[arg(long, env = "xcconfig")]
    pub xcconfig: Option<String>,

    /// xcconfig path already exported for xcodebuild
    #[arg(long, env = "XCODE_XCCONFIG_FILE", hide = true)]
    pub xcconfig_file_env: Option<String>,

    /// Settings file path
    #[arg(short, long, env = "CACHEDCARTHAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "CACHEDCARTHAGE_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl Cli {
    /// The Carthage subcommand, if one was given
    pub fn command(&self) -> Option<&str> {
        self.carthage_command
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON lines
    Json,
}
