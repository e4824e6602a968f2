//! Install directory layout.
//!
//! The compiled dependencies land under a fixed install prefix, with the
//! library directory nested inside it and a scratch directory for
//! downloads and extraction. Every invocation starts from a clean slate:
//! [`InstallLayout::distclean`] removes whatever a previous run left
//! behind before the directories are recreated.

use crate::error::{DepstrapError, Result};
use crate::shell::{self, CommandOptions};
use std::path::{Path, PathBuf};

/// Default install prefix for compiled dependencies.
pub const DEFAULT_PREFIX: &str = "/opt/tsduck.static";

/// Default scratch directory for downloads and extraction.
pub const DEFAULT_TEMP_DIR: &str = "/var/video/temp";

/// Filesystem operations the layout shells out to.
///
/// Injectable so tests can run without sudo.
pub struct FsContext<'a> {
    /// Remove a directory tree; the flag requests sudo.
    pub remove_dir: &'a dyn Fn(&Path, bool) -> Result<()>,
    /// Create a directory and its parents; the flag requests sudo.
    pub create_dir: &'a dyn Fn(&Path, bool) -> Result<()>,
}

/// Build the default `FsContext` for production use.
///
/// `rm -rf` and `mkdir -p` are shelled out (through sudo when asked)
/// because the prefix lives under `/opt` and is root-owned.
pub fn default_context() -> FsContext<'static> {
    FsContext {
        remove_dir: &|path, with_sudo| {
            let path_str = path.display().to_string();
            let (program, args): (PathBuf, Vec<&str>) = if with_sudo {
                (shell::require("sudo")?, vec!["rm", "-rf", path_str.as_str()])
            } else {
                (shell::require("rm")?, vec!["-rf", path_str.as_str()])
            };
            let output = shell::run(&program, &args, &CommandOptions::default())?;
            if output.success {
                Ok(())
            } else {
                Err(DepstrapError::CommandFailed {
                    command: format!("rm -rf {}", path_str),
                    code: output.exit_code,
                    stderr: output.stderr,
                })
            }
        },
        create_dir: &|path, with_sudo| {
            if path.exists() {
                return Ok(());
            }
            let path_str = path.display().to_string();
            let (program, args): (PathBuf, Vec<&str>) = if with_sudo {
                (shell::require("sudo")?, vec!["mkdir", "-p", path_str.as_str()])
            } else {
                (shell::require("mkdir")?, vec!["-p", path_str.as_str()])
            };
            let output = shell::run(&program, &args, &CommandOptions::default())?;
            if output.success {
                Ok(())
            } else {
                Err(DepstrapError::CommandFailed {
                    command: format!("mkdir -p {}", path_str),
                    code: output.exit_code,
                    stderr: output.stderr,
                })
            }
        },
    }
}

/// The three directories a provisioning run works with.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    /// Root install directory for compiled dependencies.
    pub prefix: PathBuf,
    /// Library directory under the prefix.
    pub libdir: PathBuf,
    /// Scratch directory for downloads and extraction.
    pub temp_dir: PathBuf,
}

impl InstallLayout {
    /// Create a layout with the library directory nested under the prefix.
    pub fn new(prefix: impl Into<PathBuf>, temp_dir: impl Into<PathBuf>) -> Self {
        let prefix = prefix.into();
        let libdir = prefix.join("lib");
        Self {
            prefix,
            libdir,
            temp_dir: temp_dir.into(),
        }
    }

    /// The fixed default layout.
    pub fn defaults() -> Self {
        Self::new(DEFAULT_PREFIX, DEFAULT_TEMP_DIR)
    }

    /// Remove everything a previous run may have left behind.
    ///
    /// The prefix is root-owned and removed with sudo; libdir lives inside
    /// it but is removed explicitly as well so a partially created layout
    /// is still cleaned.
    pub fn distclean(&self, fs: &FsContext<'_>) -> Result<()> {
        (fs.remove_dir)(&self.prefix, true)?;
        (fs.remove_dir)(&self.libdir, false)?;
        (fs.remove_dir)(&self.temp_dir, false)?;
        tracing::debug!("removed previous installation directories");
        Ok(())
    }

    /// Create the prefix, temp, and library directories.
    pub fn create(&self, fs: &FsContext<'_>) -> Result<()> {
        (fs.create_dir)(&self.prefix, true)?;
        (fs.create_dir)(&self.temp_dir, false)?;
        (fs.create_dir)(&self.libdir, false)?;
        Ok(())
    }

    /// Per-library working directory under the temp dir.
    pub fn work_dir(&self, library: &str) -> PathBuf {
        self.temp_dir.join(library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::TempDir;

    fn plain_fs() -> FsContext<'static> {
        FsContext {
            remove_dir: &|path, _| {
                if path.exists() {
                    std::fs::remove_dir_all(path)?;
                }
                Ok(())
            },
            create_dir: &|path, _| {
                std::fs::create_dir_all(path)?;
                Ok(())
            },
        }
    }

    #[test]
    fn layout_nests_libdir_under_prefix() {
        let layout = InstallLayout::new("/opt/toolkit", "/tmp/work");
        assert_eq!(layout.libdir, PathBuf::from("/opt/toolkit/lib"));
    }

    #[test]
    fn defaults_use_fixed_paths() {
        let layout = InstallLayout::defaults();
        assert_eq!(layout.prefix, PathBuf::from(DEFAULT_PREFIX));
        assert_eq!(layout.temp_dir, PathBuf::from(DEFAULT_TEMP_DIR));
    }

    #[test]
    fn create_then_distclean_round_trip() {
        let temp = TempDir::new().unwrap();
        let layout = InstallLayout::new(temp.path().join("prefix"), temp.path().join("temp"));
        let fs = plain_fs();

        layout.create(&fs).unwrap();
        assert!(layout.prefix.exists());
        assert!(layout.libdir.exists());
        assert!(layout.temp_dir.exists());

        layout.distclean(&fs).unwrap();
        assert!(!layout.prefix.exists());
        assert!(!layout.temp_dir.exists());
    }

    #[test]
    fn distclean_requests_sudo_for_prefix_only() {
        let sudo_calls: RefCell<Vec<(PathBuf, bool)>> = RefCell::new(Vec::new());
        let layout = InstallLayout::new("/opt/toolkit", "/tmp/work");

        let remove_dir = |path: &Path, with_sudo: bool| -> Result<()> {
            sudo_calls.borrow_mut().push((path.to_path_buf(), with_sudo));
            Ok(())
        };
        let create_dir = |_: &Path, _: bool| -> Result<()> { Ok(()) };
        let fs = FsContext {
            remove_dir: &remove_dir,
            create_dir: &create_dir,
        };

        layout.distclean(&fs).unwrap();

        let calls = sudo_calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0], (PathBuf::from("/opt/toolkit"), true));
        assert_eq!(calls[1], (PathBuf::from("/opt/toolkit/lib"), false));
        assert_eq!(calls[2], (PathBuf::from("/tmp/work"), false));
    }

    #[test]
    fn work_dir_is_per_library() {
        let layout = InstallLayout::new("/opt/toolkit", "/tmp/work");
        assert_eq!(
            layout.work_dir("libsrt-openssl-dev"),
            PathBuf::from("/tmp/work/libsrt-openssl-dev")
        );
    }

    #[test]
    fn distclean_aborts_on_first_failure() {
        let layout = InstallLayout::new("/opt/toolkit", "/tmp/work");
        let remove_dir = |_: &Path, _: bool| -> Result<()> {
            Err(DepstrapError::CommandFailed {
                command: "rm -rf /opt/toolkit".into(),
                code: Some(1),
                stderr: "permission denied".into(),
            })
        };
        let create_dir = |_: &Path, _: bool| -> Result<()> { Ok(()) };
        let fs = FsContext {
            remove_dir: &remove_dir,
            create_dir: &create_dir,
        };

        assert!(layout.distclean(&fs).is_err());
    }
}
