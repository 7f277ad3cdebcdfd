//! Toolchain version probes
//!
//! The Swift version is part of the cache fingerprint, so its exact output
//! matters. The Carthage version is only reported.

use crate::error::{Error, Result};
use semver::Version;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Run a command and return its trimmed stdout + stderr
async fn trimmed_combined_output(program: &str, args: &[&str]) -> Result<String> {
    let printable = format!("{} {}", program, args.join(" "));
    debug!("Executing: {}", printable);

    let output = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| Error::command_failed(printable.clone(), e))?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    let combined = combined.trim().to_string();

    if output.status.success() {
        Ok(combined)
    } else {
        Err(Error::command_exec(printable, combined))
    }
}

/// `swift -version` output
pub async fn swift_version() -> Result<String> {
    trimmed_combined_output("swift", &["-version"]).await
}

/// Installed Carthage version
pub async fn carthage_version() -> Result<Version> {
    let output = trimmed_combined_output("carthage", &["version"]).await?;
    parse_carthage_version(&output)
}

/// Find the first line of `carthage version` output that is a version.
///
/// Carthage may print update notices before the version line.
pub fn parse_carthage_version(output: &str) -> Result<Version> {
    output
        .lines()
        .find_map(|line| parse_lenient(line.trim()))
        .ok_or_else(|| Error::CarthageVersion(output.to_string()))
}

/// Accepts `0.38.0`, `0.38` and `v0.38.0`
fn parse_lenient(s: &str) -> Option<Version> {
    let s = s.strip_prefix('v').unwrap_or(s);
    if let Ok(version) = Version::parse(s) {
        return Some(version);
    }

    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() == 2 && parts.iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit())) {
        return Version::parse(&format!("{}.0", s)).ok();
    }

    None
}

/// One-line form of multi-line version output for logs
pub fn single_line(version: &str) -> String {
    version.replace('\n', "- ")
}
