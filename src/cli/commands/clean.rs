//! Clean command implementation.
//!
//! `depstrap clean` removes the install prefix and scratch directories
//! without provisioning anything.

use crate::cli::args::CleanArgs;
use crate::error::Result;
use crate::layout::{self, InstallLayout};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The clean command implementation.
pub struct CleanCommand {
    args: CleanArgs,
}

impl CleanCommand {
    /// Create a new clean command.
    pub fn new(args: CleanArgs) -> Self {
        Self { args }
    }

    fn layout(&self) -> InstallLayout {
        let defaults = InstallLayout::defaults();
        InstallLayout::new(
            self.args.prefix.clone().unwrap_or(defaults.prefix),
            self.args.temp_dir.clone().unwrap_or(defaults.temp_dir),
        )
    }
}

impl Command for CleanCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let layout = self.layout();
        out.status(&format!(
            "Removing {} and {}",
            layout.prefix.display(),
            layout.temp_dir.display()
        ));

        let fs = layout::default_context();
        layout.distclean(&fs)?;

        out.success("clean");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn layout_defaults_when_unset() {
        let cmd = CleanCommand::new(CleanArgs::default());
        assert_eq!(cmd.layout().prefix, PathBuf::from("/opt/tsduck.static"));
    }

    #[test]
    fn layout_honors_overrides() {
        let args = CleanArgs {
            prefix: Some(PathBuf::from("/opt/elsewhere")),
            temp_dir: None,
        };
        let layout = CleanCommand::new(args).layout();
        assert_eq!(layout.prefix, PathBuf::from("/opt/elsewhere"));
        assert_eq!(layout.temp_dir, PathBuf::from("/var/video/temp"));
    }
}
