//! List command implementation.
//!
//! `depstrap list` shows what the manifest would provision without
//! touching the host.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let manifest = super::load_manifest(self.args.manifest.as_deref())?;

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&manifest)?);
            return Ok(CommandResult::success());
        }

        render(&manifest, out);
        Ok(CommandResult::success())
    }
}

fn render(manifest: &Manifest, out: &Output) {
    let theme = out.theme();

    if !manifest.global_packages.is_empty() {
        out.header("Packages");
        for package in &manifest.global_packages {
            out.status(&format!("  {}", package));
        }
    }

    out.header("Libraries");
    for name in &manifest.enabled {
        // validate() guarantees every enabled name has a descriptor
        let Some(library) = manifest.libraries.get(name) else {
            continue;
        };
        out.status(&format!(
            "  {} {}",
            theme.key.apply_to(name),
            library.version
        ));
        out.status(&format!("    {}", theme.dim.apply_to(&library.download_url)));
        if !library.extra_packages.is_empty() {
            out.status(&format!(
                "    {} {}",
                theme.dim.apply_to("packages:"),
                library.extra_packages.join(", ")
            ));
        }
    }
}
