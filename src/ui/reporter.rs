//! Status-line rendering and printing.
//!
//! [`Reporter`] is the small logging interface used by every helper in
//! this crate. A status line is: prefix, styled message, optional
//! wall-clock timestamp, optional `[<m>m:<s>s]` duration tag, and
//! optionally the captured command output on a new line.
//!
//! Rendering is separated from printing so the exact line format can be
//! asserted in tests.

use std::time::Duration;

use super::status::StatusKind;
use super::theme::{should_use_colors, AzlabTheme};

/// Format a duration as whole minutes and seconds, e.g. `[1m:42s]`.
pub fn format_minutes_seconds(d: Duration) -> String {
    let secs = d.as_secs();
    format!("[{}m:{}s]", secs / 60, secs % 60)
}

/// Console status reporter.
///
/// # Example
///
/// ```
/// use azlab::ui::Reporter;
///
/// let reporter = Reporter::plain();
/// reporter.info("Using existing resource group 'rg-lab'");
/// ```
#[derive(Debug, Clone)]
pub struct Reporter {
    theme: AzlabTheme,
    /// Emoji prefixes on a TTY, bracketed text otherwise.
    use_icons: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    /// Create a reporter, choosing colors and icons from the terminal.
    pub fn new() -> Self {
        if should_use_colors() {
            Self {
                theme: AzlabTheme::new(),
                use_icons: true,
            }
        } else {
            Self::plain()
        }
    }

    /// Create a reporter with no colors and bracketed prefixes.
    pub fn plain() -> Self {
        Self {
            theme: AzlabTheme::plain(),
            use_icons: false,
        }
    }

    fn prefix(&self, kind: StatusKind) -> &'static str {
        if self.use_icons {
            kind.icon()
        } else {
            kind.bracketed()
        }
    }

    /// Render a full status line without printing it.
    ///
    /// `output` is appended on a new line when non-empty; outcome kinds
    /// (success/warning/error) carry a wall-clock timestamp.
    pub fn render(
        &self,
        kind: StatusKind,
        message: &str,
        output: &str,
        duration: Option<Duration>,
    ) -> String {
        let mut line = format!(
            "{} {}",
            self.prefix(kind),
            kind.style(&self.theme).apply_to(message)
        );

        if kind.timestamped() {
            let clock = if self.use_icons { "⌚" } else { "at" };
            let now = chrono::Local::now().format("%H:%M:%S");
            line.push_str(&format!(
                " {}",
                self.theme.duration.apply_to(format!("{} {}", clock, now))
            ));
        }

        if let Some(d) = duration {
            line.push_str(&format!(
                " {}",
                self.theme.duration.apply_to(format_minutes_seconds(d))
            ));
        }

        if !output.is_empty() {
            line.push('\n');
            line.push_str(output);
        }

        line
    }

    /// Print a status line of the given kind.
    pub fn status(&self, kind: StatusKind, message: &str) {
        println!("{}", self.render(kind, message, "", None));
    }

    /// Print a status line with captured output and a duration tag.
    pub fn status_with(
        &self,
        kind: StatusKind,
        message: &str,
        output: &str,
        duration: Option<Duration>,
    ) {
        println!("{}", self.render(kind, message, output, duration));
    }

    /// Print a success line.
    pub fn success(&self, message: &str) {
        self.status(StatusKind::Success, message);
    }

    /// Print an informational line.
    pub fn info(&self, message: &str) {
        self.status(StatusKind::Info, message);
    }

    /// Print a warning line.
    pub fn warning(&self, message: &str) {
        self.status(StatusKind::Warning, message);
    }

    /// Print an error line.
    pub fn error(&self, message: &str) {
        self.status(StatusKind::Error, message);
    }

    /// Echo a command about to be executed.
    pub fn command(&self, command: &str) {
        self.status(StatusKind::Command, &format!("Running: {}", command));
    }
}
