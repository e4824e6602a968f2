//! The provisioning pipeline.
//!
//! One run walks the manifest end to end: wipe and recreate the install
//! layout, ensure the global apt packages, then per enabled library
//! install its extra packages, download and extract the source tarball,
//! and synthesize the configure command. The first failure aborts the
//! run; a rerun starts from a clean slate again.

use crate::archive;
use crate::error::Result;
use crate::fetch::Downloader;
use crate::layout::{self, FsContext, InstallLayout};
use crate::manifest::template::{synthesize_steps, Substitutions};
use crate::manifest::Manifest;
use crate::packages::{self, ensure_installed, AptContext, PackageOutcome};
use crate::ui::Output;
use std::path::Path;

/// Side-effecting operations the pipeline needs, injectable for tests.
pub struct PipelineContext<'a> {
    /// Directory creation and removal.
    pub fs: FsContext<'a>,
    /// Package queries and installs.
    pub apt: AptContext<'a>,
    /// Filesystem existence probe for `check_path` placeholders.
    pub path_exists: &'a dyn Fn(&Path) -> bool,
}

/// Build the default `PipelineContext` for production use.
pub fn default_context() -> PipelineContext<'static> {
    PipelineContext {
        fs: layout::default_context(),
        apt: packages::default_context(),
        path_exists: &|path| path.exists(),
    }
}

/// Knobs for one provisioning run.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Keep whatever a previous run left behind.
    pub skip_clean: bool,
    /// Restrict the run to these enabled libraries.
    pub only: Vec<String>,
}

/// Run the provisioning pipeline.
pub fn run(
    manifest: &Manifest,
    layout: &InstallLayout,
    options: &PipelineOptions,
    downloader: &Downloader,
    ctx: &PipelineContext<'_>,
    out: &Output,
) -> Result<()> {
    // Resolve the library set up front so a typo in --only fails before
    // any directory is touched.
    let libraries = manifest.enabled_libraries(&options.only)?;

    if options.skip_clean {
        tracing::debug!("keeping previous installation directories");
    } else {
        out.status("Cleaning previous installation");
        layout.distclean(&ctx.fs)?;
    }
    layout.create(&ctx.fs)?;

    if !manifest.global_packages.is_empty() {
        out.header("Packages");
        for package in &manifest.global_packages {
            report_package(package, ensure_installed(package, &ctx.apt)?, out);
        }
    }

    for (name, library) in libraries {
        out.header(&format!("{} {}", name, library.version));

        for package in &library.extra_packages {
            report_package(package, ensure_installed(package, &ctx.apt)?, out);
        }

        let work_dir = layout.work_dir(name);
        (ctx.fs.create_dir)(&work_dir, false)?;

        let archive_path = downloader.download(
            &library.download_url,
            &work_dir,
            out.mode().shows_progress(),
        )?;
        let source_root = archive::extract(&archive_path, &work_dir)?;
        out.success(&format!("extracted to {}", source_root.display()));

        let subs = Substitutions::from_layout(layout);
        let create_dir = |path: &Path| (ctx.fs.create_dir)(path, false);
        let synthesized = synthesize_steps(
            name,
            &library.configure_steps,
            &source_root,
            &subs,
            ctx.path_exists,
            &create_dir,
        )?;

        if let Some(configure) = synthesized {
            out.status("Configure with:");
            out.command(&format!("cd {}", configure.working_dir.display()));
            out.command(&configure.command);
        }
    }

    out.success("all dependencies provisioned");
    Ok(())
}

fn report_package(package: &str, outcome: PackageOutcome, out: &Output) {
    match outcome {
        PackageOutcome::AlreadyInstalled => out.skipped(package),
        PackageOutcome::Installed => out.success(package),
    }
}
