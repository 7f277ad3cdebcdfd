//! Carthage options string handling

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Carthage flag selecting a project directory other than the working one
pub const PROJECT_DIR_ARG: &str = "--project-directory";

/// Shell-split the free-form options string
pub fn split_options(options: &str) -> Result<Vec<String>> {
    if options.trim().is_empty() {
        return Ok(Vec::new());
    }

    shell_words::split(options).map_err(|e| Error::OptionsSplit {
        options: options.to_string(),
        reason: e.to_string(),
    })
}

/// The directory after `--project-directory`, or `default`
pub fn parse_project_dir(default: &Path, options: &[String]) -> PathBuf {
    options
        .iter()
        .skip_while(|option| option.as_str() != PROJECT_DIR_ARG)
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| default.to_path_buf())
}
