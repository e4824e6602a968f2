//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].

pub mod clean;
pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::error::Result;
use crate::manifest::Manifest;
use std::path::Path;

/// The manifest a command operates on: a file when `--manifest` was
/// given, the embedded default otherwise.
pub(crate) fn load_manifest(path: Option<&Path>) -> Result<Manifest> {
    match path {
        Some(path) => Manifest::load(path),
        None => Manifest::builtin(),
    }
}
