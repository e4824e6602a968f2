//! Command-line interface for depstrap.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CleanArgs, Cli, Commands, CompletionsArgs, InstallArgs, ListArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
