//! Download progress bars.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress display for a streamed download.
///
/// With a known content length this is a byte-count bar; without one the
/// server gave us nothing to divide by, so the bar degrades to an
/// indeterminate spinner that still shows bytes received.
pub struct DownloadProgress {
    bar: ProgressBar,
}

impl DownloadProgress {
    /// Create a progress display for a download of `total` bytes.
    pub fn new(name: &str, total: Option<u64>) -> Self {
        let bar = match total {
            Some(len) => {
                let bar = ProgressBar::new(len);
                bar.set_style(
                    ProgressStyle::default_bar()
                        .template("{msg} [{bar:30.magenta}] {bytes}/{total_bytes} ({percent}%)")
                        .unwrap()
                        .progress_chars("=> "),
                );
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(
                    ProgressStyle::default_spinner()
                        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
                        .template("{spinner:.magenta} {msg} {bytes}")
                        .unwrap(),
                );
                bar.enable_steady_tick(Duration::from_millis(80));
                bar
            }
        };
        bar.set_message(name.to_string());

        Self { bar }
    }

    /// Create a hidden progress display (quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record received bytes.
    pub fn advance(&self, bytes: u64) {
        self.bar.inc(bytes);
    }

    /// Finish and clear the bar.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Bytes recorded so far.
    pub fn received(&self) -> u64 {
        self.bar.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_progress_tracks_bytes() {
        let progress = DownloadProgress::new("gcc-6.5.0.tar.gz", Some(1024));
        progress.advance(512);
        assert_eq!(progress.received(), 512);
        progress.finish();
    }

    #[test]
    fn unbounded_progress_still_tracks_bytes() {
        let progress = DownloadProgress::new("srt.tar.gz", None);
        progress.advance(128);
        progress.advance(128);
        assert_eq!(progress.received(), 256);
        progress.finish();
    }

    #[test]
    fn hidden_progress_is_silent() {
        let progress = DownloadProgress::hidden();
        progress.advance(64);
        assert_eq!(progress.received(), 64);
        progress.finish();
    }
}
