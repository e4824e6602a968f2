//! depstrap - One-shot provisioning of build-time dependencies.
//!
//! depstrap prepares a Debian host for building the stream toolkit: it
//! installs the apt packages the build needs, and for the handful of
//! libraries without a usable packaged version (a pinned GCC libstdc++,
//! pcsclite, curl, SRT) it downloads the upstream source tarball, extracts
//! it, and synthesizes the `configure` invocation from a declarative
//! manifest with templated placeholders.
//!
//! # Modules
//!
//! - [`archive`] - Tarball extraction and source-root discovery
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Streamed tarball downloads with progress
//! - [`layout`] - Install prefix / libdir / temp directory layout
//! - [`manifest`] - Declarative dependency manifest and configure templates
//! - [`packages`] - dpkg queries and non-interactive apt installs
//! - [`runner`] - The linear provisioning pipeline
//! - [`shell`] - Host command execution and PATH lookup
//! - [`ui`] - Terminal output, theme, and progress bars
//!
//! # Example
//!
//! ```
//! use depstrap::manifest::template::{synthesize, Substitutions};
//! use std::path::Path;
//!
//! let subs = Substitutions::new("/opt/toolkit", "/opt/toolkit/lib");
//! let command = synthesize(
//!     "configure --prefix=<%prefix%> --libdir=<%libdir%>",
//!     Path::new("/tmp/src/pkg-1.0"),
//!     &subs,
//!     &|_| true,
//! )
//! .unwrap();
//! assert_eq!(
//!     command,
//!     "/tmp/src/pkg-1.0/configure --prefix=/opt/toolkit --libdir=/opt/toolkit/lib"
//! );
//! ```

pub mod archive;
pub mod cli;
pub mod error;
pub mod fetch;
pub mod layout;
pub mod manifest;
pub mod packages;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{DepstrapError, Result};
