//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, InstallArgs};
use crate::error::Result;
use crate::ui::Output;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing through `out`.
    fn execute(&self, out: &Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// A bare invocation runs `install` with default arguments, so
    /// `depstrap` on its own provisions everything.
    pub fn dispatch(&self, cli: &Cli, out: &Output) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Install(args)) => {
                let cmd = super::install::InstallCommand::new(args.clone());
                cmd.execute(out)
            }
            Some(Commands::Clean(args)) => {
                let cmd = super::clean::CleanCommand::new(args.clone());
                cmd.execute(out)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(args.clone());
                cmd.execute(out)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
            None => {
                let cmd = super::install::InstallCommand::new(InstallArgs::default());
                cmd.execute(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }
}
