//! Captured subprocess execution.
//!
//! Everything depstrap shells out to (`dpkg`, `sudo`, `apt-get`,
//! `debconf-set-selections`, `rm`, `mkdir`) goes through [`run`]. Commands
//! are invoked argv-style, never through a shell, so package names and
//! paths need no quoting.

use crate::error::{DepstrapError, Result};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a host command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Data written to the child's stdin before waiting.
    pub stdin: Option<String>,
}

/// Execute a host command with captured output.
///
/// A non-zero exit is reported in the returned [`CommandOutput`], not as an
/// `Err`; only spawn failures become errors.
pub fn run(program: &Path, args: &[&str], options: &CommandOptions) -> Result<CommandOutput> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd.stdin(if options.stdin.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    });

    let display = display_command(program, args);

    let mut child = cmd.spawn().map_err(|e| DepstrapError::CommandFailed {
        command: display.clone(),
        code: None,
        stderr: e.to_string(),
    })?;

    if let Some(input) = &options.stdin {
        // Dropping the handle closes the pipe so the child sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes())?;
        }
    }

    let output = child
        .wait_with_output()
        .map_err(|e| DepstrapError::CommandFailed {
            command: display,
            code: None,
            stderr: e.to_string(),
        })?;

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration: start.elapsed(),
        success: output.status.success(),
    })
}

/// Render a program + args for error messages.
pub fn display_command(program: &Path, args: &[&str]) -> String {
    let mut parts = vec![program.display().to_string()];
    parts.extend(args.iter().map(|a| a.to_string()));
    parts.join(" ")
}
