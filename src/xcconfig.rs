//! Build configuration (`.xcconfig`) input resolution
//!
//! The input may be a local path, a `file://` URL or an `http(s)://` URL.
//! Remote files are downloaded so Carthage can be pointed at a local path
//! through `XCODE_XCCONFIG_FILE`.

use crate::error::{Error, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Turns a file reference into a local path
pub trait FileProvider {
    fn local_path(&self, input: &str) -> Result<String>;
}

/// Resolves local paths and downloads remote files
pub struct DownloadingFileProvider {
    download_dir: PathBuf,
}

impl DownloadingFileProvider {
    /// Download into the system temporary directory
    pub fn new() -> Self {
        Self::with_download_dir(std::env::temp_dir())
    }

    pub fn with_download_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: dir.into(),
        }
    }

    fn download(&self, url: &str) -> Result<String> {
        let err = |reason: String| Error::XcconfigResolve {
            input: url.to_string(),
            reason,
        };

        info!("Downloading {}", url);
        let mut response = ureq::get(url).call().map_err(|e| err(e.to_string()))?;
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| err(e.to_string()))?;

        let name = url
            .rsplit('/')
            .next()
            .filter(|n| !n.is_empty() && !n.contains(['?', '#']))
            .unwrap_or("downloaded.xcconfig");

        std::fs::create_dir_all(&self.download_dir).map_err(|e| err(e.to_string()))?;
        let mut file = tempfile::Builder::new()
            .prefix("cachedcarthage-")
            .suffix(&format!("-{}", name))
            .tempfile_in(&self.download_dir)
            .map_err(|e| err(e.to_string()))?;
        file.write_all(&body).map_err(|e| err(e.to_string()))?;
        let (_, path) = file.keep().map_err(|e| err(e.to_string()))?;

        Ok(path.to_string_lossy().into_owned())
    }
}

impl Default for DownloadingFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProvider for DownloadingFileProvider {
    fn local_path(&self, input: &str) -> Result<String> {
        if let Some(path) = input.strip_prefix("file://") {
            return Ok(path.to_string());
        }
        if input.starts_with("http://") || input.starts_with("https://") {
            return self.download(input);
        }
        Ok(input.to_string())
    }
}

/// Pick the xcconfig path: an explicit input wins over the environment value
pub fn resolve_xcconfig_path(
    input: &str,
    env_path: &str,
    provider: &dyn FileProvider,
) -> Result<String> {
    if input.is_empty() {
        return Ok(env_path.to_string());
    }
    provider.local_path(input)
}

/// Resolve on the blocking pool, since a provider may download the file
pub async fn resolve_xcconfig<P>(input: String, env_path: String, provider: P) -> Result<String>
where
    P: FileProvider + Send + 'static,
{
    let task_input = input.clone();
    tokio::task::spawn_blocking(move || resolve_xcconfig_path(&task_input, &env_path, &provider))
        .await
        .map_err(|e| Error::XcconfigResolve {
            input,
            reason: format!("resolve task failed: {}", e),
        })?
}
