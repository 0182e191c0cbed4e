//! Console status output: theme, status vocabulary, and reporter.

pub mod reporter;
pub mod status;
pub mod theme;

pub use reporter::{format_minutes_seconds, Reporter};
pub use status::StatusKind;
pub use theme::{should_use_colors, AzlabTheme};
