//! Visual theme and styling.

use console::Style;

/// depstrap's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for section headers (bold).
    pub header: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold(),
            command: Style::new().dim().italic(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            command: Style::new(),
            key: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a skipped message (icon + text in dim).
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_success_includes_message() {
        let theme = Theme::plain();
        assert_eq!(theme.format_success("done"), "✓ done");
    }

    #[test]
    fn format_error_includes_message() {
        let theme = Theme::plain();
        assert_eq!(theme.format_error("broken"), "✗ broken");
    }

    #[test]
    fn format_skipped_includes_message() {
        let theme = Theme::plain();
        assert_eq!(theme.format_skipped("already installed"), "○ already installed");
    }
}
