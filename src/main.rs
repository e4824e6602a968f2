//! depstrap CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use depstrap::cli::{Cli, CommandDispatcher};
use depstrap::ui::{Output, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("depstrap=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("depstrap=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("depstrap starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let out = Output::new(output_mode, cli.no_color);

    // Dispatch command
    let dispatcher = CommandDispatcher::new();

    match dispatcher.dispatch(&cli, &out) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            out.error(&format!("{}", e));
            ExitCode::from(1)
        }
    }
}
