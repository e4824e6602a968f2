//! Debian package provisioning.
//!
//! Package state is queried through `dpkg` and missing packages are
//! installed with a non-interactive `apt-get`. The debconf frontend is
//! forced to `Noninteractive` first so package postinst scripts never
//! block the run on a prompt.

use crate::error::{DepstrapError, Result};
use crate::shell::{self, CommandOptions};

/// Package operations, injectable so tests can run without apt.
pub struct AptContext<'a> {
    /// Whether a package is registered as installed.
    pub query_installed: &'a dyn Fn(&str) -> Result<bool>,
    /// Install one package non-interactively.
    pub install: &'a dyn Fn(&str) -> Result<()>,
}

/// Build the default `AptContext` for production use.
pub fn default_context() -> AptContext<'static> {
    AptContext {
        query_installed: &|package| {
            let dpkg = shell::require("dpkg")?;
            let output = shell::run(&dpkg, &["-s", package], &CommandOptions::default())?;
            Ok(output.success)
        },
        install: &|package| {
            set_noninteractive_frontend()?;

            let sudo = shell::require("sudo")?;
            let apt_get = shell::require("apt-get")?;
            let apt_get = apt_get.display().to_string();
            let output = shell::run(
                &sudo,
                &[apt_get.as_str(), "-qq", "install", "-y", package],
                &CommandOptions::default(),
            )?;

            if output.success {
                Ok(())
            } else {
                Err(DepstrapError::PackageInstallFailed {
                    package: package.to_string(),
                    stderr: output.stderr.trim().to_string(),
                })
            }
        },
    }
}

/// Select the non-interactive debconf frontend.
///
/// Equivalent to `echo 'debconf debconf/frontend select Noninteractive'
/// | sudo debconf-set-selections`.
fn set_noninteractive_frontend() -> Result<()> {
    let sudo = shell::require("sudo")?;
    let dss = shell::require("debconf-set-selections")?;
    let dss = dss.display().to_string();

    let options = CommandOptions {
        stdin: Some("debconf debconf/frontend select Noninteractive\n".to_string()),
        ..Default::default()
    };
    let output = shell::run(&sudo, &[dss.as_str()], &options)?;

    if output.success {
        Ok(())
    } else {
        Err(DepstrapError::CommandFailed {
            command: "debconf-set-selections".to_string(),
            code: output.exit_code,
            stderr: output.stderr.trim().to_string(),
        })
    }
}

/// Whether [`ensure_installed`] had to install anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageOutcome {
    /// Already registered with dpkg; no action taken.
    AlreadyInstalled,
    /// Installed during this run.
    Installed,
}

/// Install a package unless it is already registered.
///
/// Idempotent: re-running against an installed package performs no
/// install action.
pub fn ensure_installed(package: &str, ctx: &AptContext<'_>) -> Result<PackageOutcome> {
    if (ctx.query_installed)(package)? {
        tracing::debug!(package, "already installed");
        return Ok(PackageOutcome::AlreadyInstalled);
    }

    tracing::info!(package, "installing");
    (ctx.install)(package)?;
    Ok(PackageOutcome::Installed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn ensure_installed_skips_registered_package() {
        let install_calls = RefCell::new(0usize);

        let query = |_: &str| -> Result<bool> { Ok(true) };
        let install = |_: &str| -> Result<()> {
            *install_calls.borrow_mut() += 1;
            Ok(())
        };
        let ctx = AptContext {
            query_installed: &query,
            install: &install,
        };

        let outcome = ensure_installed("git", &ctx).unwrap();
        assert_eq!(outcome, PackageOutcome::AlreadyInstalled);
        assert_eq!(*install_calls.borrow(), 0);
    }

    #[test]
    fn ensure_installed_installs_missing_package() {
        let installed = RefCell::new(Vec::new());

        let query = |_: &str| -> Result<bool> { Ok(false) };
        let install = |package: &str| -> Result<()> {
            installed.borrow_mut().push(package.to_string());
            Ok(())
        };
        let ctx = AptContext {
            query_installed: &query,
            install: &install,
        };

        let outcome = ensure_installed("cmake", &ctx).unwrap();
        assert_eq!(outcome, PackageOutcome::Installed);
        assert_eq!(*installed.borrow(), vec!["cmake"]);
    }

    #[test]
    fn ensure_installed_is_idempotent_across_runs() {
        // First run installs; the second sees the package registered.
        let registered = RefCell::new(false);
        let install_calls = RefCell::new(0usize);

        let query = |_: &str| -> Result<bool> { Ok(*registered.borrow()) };
        let install = |_: &str| -> Result<()> {
            *registered.borrow_mut() = true;
            *install_calls.borrow_mut() += 1;
            Ok(())
        };
        let ctx = AptContext {
            query_installed: &query,
            install: &install,
        };

        assert_eq!(
            ensure_installed("doxygen", &ctx).unwrap(),
            PackageOutcome::Installed
        );
        assert_eq!(
            ensure_installed("doxygen", &ctx).unwrap(),
            PackageOutcome::AlreadyInstalled
        );
        assert_eq!(*install_calls.borrow(), 1);
    }

    #[test]
    fn ensure_installed_propagates_install_failure() {
        let query = |_: &str| -> Result<bool> { Ok(false) };
        let install = |package: &str| -> Result<()> {
            Err(DepstrapError::PackageInstallFailed {
                package: package.to_string(),
                stderr: "E: Unable to locate package".into(),
            })
        };
        let ctx = AptContext {
            query_installed: &query,
            install: &install,
        };

        let err = ensure_installed("libmystery-dev", &ctx).unwrap_err();
        assert!(err.to_string().contains("libmystery-dev"));
    }

    #[test]
    fn ensure_installed_propagates_query_failure() {
        let query = |_: &str| -> Result<bool> {
            Err(DepstrapError::UtilityNotFound {
                utility: "dpkg".into(),
            })
        };
        let install = |_: &str| -> Result<()> { Ok(()) };
        let ctx = AptContext {
            query_installed: &query,
            install: &install,
        };

        let err = ensure_installed("git", &ctx).unwrap_err();
        assert!(matches!(err, DepstrapError::UtilityNotFound { .. }));
    }
}
