//! Terminal output.
//!
//! - [`theme`] - Color styles and message formatting
//! - [`output`] - Output mode and status writer
//! - [`progress`] - Download progress bars

pub mod output;
pub mod progress;
pub mod theme;

pub use output::{Output, OutputMode};
pub use progress::DownloadProgress;
pub use theme::Theme;
