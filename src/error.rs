//! Error types for depstrap operations.
//!
//! This module defines [`DepstrapError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DepstrapError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DepstrapError::Other`) for unexpected errors
//! - The driver aborts the whole run on the first error; there are no retries

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for depstrap operations.
#[derive(Debug, Error)]
pub enum DepstrapError {
    /// Failed to parse a dependency manifest.
    #[error("Failed to parse manifest: {message}")]
    ManifestParseError { message: String },

    /// Invalid manifest structure or values.
    #[error("Invalid manifest: {message}")]
    ManifestValidationError { message: String },

    /// An enabled library has no descriptor in the manifest.
    #[error("Unknown library: {name}")]
    UnknownLibrary { name: String },

    /// A required host utility was not found on PATH.
    #[error("Can't find required utility '{utility}' on PATH")]
    UtilityNotFound { utility: String },

    /// A shelled-out command exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// An apt package could not be installed.
    #[error("Failed to install package '{package}': {stderr}")]
    PackageInstallFailed { package: String, stderr: String },

    /// A source tarball could not be downloaded.
    #[error("Can't download {url}: {message}")]
    DownloadFailed { url: String, message: String },

    /// The downloaded file is not a recognized tar-family archive.
    #[error("Unsupported archive format: {path}")]
    UnsupportedArchive { path: PathBuf },

    /// Archive extraction failed.
    #[error("Can't extract archive {path}: {message}")]
    ExtractionFailed { path: PathBuf, message: String },

    /// The extraction target does not hold exactly one source root.
    #[error("Expected exactly one entry at the root of {path}, found {entries}")]
    AmbiguousSourceRoot { path: PathBuf, entries: usize },

    /// A `<%check_path:...%>` placeholder referenced an absent path.
    #[error("Path does not exist: {path}")]
    MissingPath { path: PathBuf },

    /// A placeholder token survived substitution.
    #[error("Unresolved placeholder in configure template: {token}")]
    UnresolvedPlaceholder { token: String },

    /// A configure step list produced no configure command.
    #[error("Configure steps for '{library}' produced no configure command")]
    EmptyConfigureCommand { library: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for depstrap operations.
pub type Result<T> = std::result::Result<T, DepstrapError>;
