//! Shell completions generation.
//!
//! The `depstrap completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::Output;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _out: &Output) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "depstrap", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
