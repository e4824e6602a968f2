//! Install command implementation.
//!
//! `depstrap install` (also the default command) runs the full
//! provisioning pipeline against the manifest.

use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::fetch::Downloader;
use crate::layout::InstallLayout;
use crate::runner::{self, PipelineOptions};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(args: InstallArgs) -> Self {
        Self { args }
    }

    /// The layout this run targets, with defaults filled in.
    fn layout(&self) -> InstallLayout {
        let defaults = InstallLayout::defaults();
        InstallLayout::new(
            self.args.prefix.clone().unwrap_or(defaults.prefix),
            self.args.temp_dir.clone().unwrap_or(defaults.temp_dir),
        )
    }

    fn options(&self) -> PipelineOptions {
        PipelineOptions {
            skip_clean: self.args.skip_clean,
            only: self.args.only.clone(),
        }
    }
}

impl Command for InstallCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let manifest = super::load_manifest(self.args.manifest.as_deref())?;
        let layout = self.layout();
        let ctx = runner::default_context();
        let downloader = Downloader::default();

        runner::run(&manifest, &layout, &self.options(), &downloader, &ctx, out)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn layout_defaults_when_unset() {
        let cmd = InstallCommand::new(InstallArgs::default());
        let layout = cmd.layout();
        assert_eq!(layout.prefix, PathBuf::from("/opt/tsduck.static"));
        assert_eq!(layout.temp_dir, PathBuf::from("/var/video/temp"));
        assert_eq!(layout.libdir, PathBuf::from("/opt/tsduck.static/lib"));
    }

    #[test]
    fn layout_honors_overrides() {
        let args = InstallArgs {
            prefix: Some(PathBuf::from("/opt/elsewhere")),
            temp_dir: Some(PathBuf::from("/tmp/scratch")),
            ..Default::default()
        };
        let cmd = InstallCommand::new(args);
        let layout = cmd.layout();
        assert_eq!(layout.prefix, PathBuf::from("/opt/elsewhere"));
        assert_eq!(layout.libdir, PathBuf::from("/opt/elsewhere/lib"));
        assert_eq!(layout.temp_dir, PathBuf::from("/tmp/scratch"));
    }

    #[test]
    fn options_carry_filter_and_skip_clean() {
        let args = InstallArgs {
            skip_clean: true,
            only: vec!["libsrt-openssl-dev".to_string()],
            ..Default::default()
        };
        let options = InstallCommand::new(args).options();
        assert!(options.skip_clean);
        assert_eq!(options.only, vec!["libsrt-openssl-dev"]);
    }
}
