//! PATH lookup for required host utilities.

use crate::error::{DepstrapError, Result};
use std::path::PathBuf;

/// Locate a utility on PATH.
pub fn which(name: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path) {
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Locate a utility on PATH, or fail with an actionable error.
pub fn require(name: &str) -> Result<PathBuf> {
    which(name).ok_or_else(|| DepstrapError::UtilityNotFound {
        utility: name.to_string(),
    })
}

#[cfg(unix)]
fn is_executable(path: &std::path::Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &std::path::Path) -> bool {
    path.is_file()
}
