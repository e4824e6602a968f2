//! CLI argument definitions.
//!
//! All arguments are defined with clap's derive macros; the entry point
//! is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// depstrap - One-shot provisioning of build-time dependencies.
#[derive(Debug, Parser)]
#[command(name = "depstrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Provision all dependencies (default if no command specified)
    Install(InstallArgs),

    /// Remove the install prefix and scratch directories
    Clean(CleanArgs),

    /// List the packages and libraries the manifest provisions
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Install prefix for compiled dependencies
    #[arg(long)]
    pub prefix: Option<PathBuf>,

    /// Scratch directory for downloads and extraction
    #[arg(long)]
    pub temp_dir: Option<PathBuf>,

    /// Path to a manifest file (overrides the embedded manifest)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Keep directories from a previous run
    #[arg(long)]
    pub skip_clean: bool,

    /// Provision only these enabled libraries (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}

/// Arguments for the `clean` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CleanArgs {
    /// Install prefix for compiled dependencies
    #[arg(long)]
    pub prefix: Option<PathBuf>,

    /// Scratch directory for downloads and extraction
    #[arg(long)]
    pub temp_dir: Option<PathBuf>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to a manifest file (overrides the embedded manifest)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
