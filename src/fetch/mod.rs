//! Source tarball downloads.
//!
//! Archives are streamed to disk with a fixed request timeout and coarse
//! progress reporting. A response without a Content-Length header is not
//! an error; progress just degrades to an indeterminate spinner.

use crate::error::{DepstrapError, Result};
use crate::ui::DownloadProgress;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fixed timeout for tarball requests.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(120);

const CHUNK_SIZE: usize = 8192;

/// Downloads source tarballs with streamed writes and progress.
pub struct Downloader {
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl Downloader {
    /// Create a downloader with the specified timeout.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            client: reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Download `url` into `dest_dir`, named after the final URL segment.
    ///
    /// Returns the path of the written archive.
    pub fn download(&self, url: &str, dest_dir: &Path, show_progress: bool) -> Result<PathBuf> {
        let filename = archive_filename(url)?;
        let dest = dest_dir.join(filename);

        tracing::info!(url, "downloading");

        let mut response =
            self.client
                .get(url)
                .send()
                .map_err(|e| DepstrapError::DownloadFailed {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;

        if !response.status().is_success() {
            return Err(DepstrapError::DownloadFailed {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let progress = if show_progress {
            DownloadProgress::new(filename, response.content_length())
        } else {
            DownloadProgress::hidden()
        };

        let mut file = std::fs::File::create(&dest)?;
        let mut buffer = [0u8; CHUNK_SIZE];
        loop {
            let read = response
                .read(&mut buffer)
                .map_err(|e| DepstrapError::DownloadFailed {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            if read == 0 {
                break;
            }
            file.write_all(&buffer[..read])?;
            progress.advance(read as u64);
        }
        file.flush()?;
        progress.finish();

        tracing::debug!(
            path = %dest.display(),
            bytes = std::fs::metadata(&dest)?.len(),
            "archive received"
        );
        Ok(dest)
    }
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new(DOWNLOAD_TIMEOUT)
    }
}

/// The archive file name is the final path segment of the URL.
fn archive_filename(url: &str) -> Result<&str> {
    let name = url.rsplit('/').next().unwrap_or_default();
    if url.is_empty() || name.is_empty() {
        return Err(DepstrapError::DownloadFailed {
            url: url.to_string(),
            message: "URL has no file name".to_string(),
        });
    }
    Ok(name)
}
