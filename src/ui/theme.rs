//! Visual theme and styling.

use console::Style;

/// Azlab's visual theme.
///
/// One `console::Style` slot per kind of text that appears in a status
/// line. Colors follow the conventions of the `az` CLI labs: green for
/// success, blue for informational text, red for errors, yellow for
/// warnings.
#[derive(Debug, Clone)]
pub struct AzlabTheme {
    /// Style for success messages (green bold).
    pub success: Style,
    /// Style for informational messages (blue bold).
    pub info: Style,
    /// Style for warning messages (yellow bold).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for echoed commands (blue bold).
    pub command: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for durations and timestamps (dim).
    pub duration: Style,
}

impl Default for AzlabTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl AzlabTheme {
    /// Create the default azlab theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green().bold(),
            info: Style::new().blue().bold(),
            warning: Style::new().yellow().bold(),
            error: Style::new().red().bold(),
            command: Style::new().blue().bold(),
            dim: Style::new().dim(),
            duration: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            info: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            command: Style::new(),
            dim: Style::new(),
            duration: Style::new(),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
