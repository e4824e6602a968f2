//! Output mode and status writer.

use super::theme::Theme;
use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including synthesized commands and captured stderr.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show nothing except errors.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows download progress bars.
    pub fn shows_progress(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows verbose detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Status writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: Theme,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode, no_color: bool) -> Self {
        let theme = if no_color {
            Theme::plain()
        } else {
            Theme::new()
        };
        Self { mode, theme }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Get the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Write a plain status line.
    pub fn status(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a section header.
    pub fn header(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.header.apply_to(msg));
        }
    }

    /// Write a success line.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    /// Write a skipped line.
    pub fn skipped(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_skipped(msg));
        }
    }

    /// Write a warning line.
    pub fn warning(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_warning(msg));
        }
    }

    /// Write an error line. Always shown, on stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    /// Write a command line (shown dim, status modes only).
    pub fn command(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("  {}", self.theme.command.apply_to(msg));
        }
    }

    /// Write verbose detail.
    pub fn detail(&self, msg: &str) {
        if self.mode.shows_detail() {
            println!("{}", self.theme.dim.apply_to(msg));
        }
    }
}
