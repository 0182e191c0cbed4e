//! Unified status vocabulary for consistent console output.
//!
//! `StatusKind` provides the single canonical set of status icons and
//! colors used by every helper in this crate, replacing per-call-site
//! formatting.

use super::theme::AzlabTheme;

/// Canonical status kinds used across all azlab output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Operation completed successfully.
    Success,
    /// Informational notice.
    Info,
    /// Non-fatal warning.
    Warning,
    /// Operation failed.
    Error,
    /// A command about to be executed.
    Command,
}

impl StatusKind {
    /// Emoji icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Info => "👉",
            Self::Warning => "⚠️",
            Self::Error => "⛔",
            Self::Command => "⚙️",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Info => "[info]",
            Self::Warning => "[warn]",
            Self::Error => "[FAIL]",
            Self::Command => "[cmd]",
        }
    }

    /// Apply this kind's message style from the given theme.
    pub fn style<'a>(self, theme: &'a AzlabTheme) -> &'a console::Style {
        match self {
            Self::Success => &theme.success,
            Self::Info => &theme.info,
            Self::Warning => &theme.warning,
            Self::Error => &theme.error,
            Self::Command => &theme.command,
        }
    }

    /// Whether status lines of this kind carry a wall-clock timestamp.
    ///
    /// Info and command echoes are transient context, only outcome lines
    /// (success/warning/error) are timestamped.
    pub fn timestamped(self) -> bool {
        matches!(self, Self::Success | Self::Warning | Self::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [StatusKind; 5] = [
        StatusKind::Success,
        StatusKind::Info,
        StatusKind::Warning,
        StatusKind::Error,
        StatusKind::Command,
    ];

    #[test]
    fn icon_returns_emoji() {
        assert_eq!(StatusKind::Success.icon(), "✅");
        assert_eq!(StatusKind::Info.icon(), "👉");
        assert_eq!(StatusKind::Warning.icon(), "⚠️");
        assert_eq!(StatusKind::Error.icon(), "⛔");
        assert_eq!(StatusKind::Command.icon(), "⚙️");
    }

    #[test]
    fn bracketed_returns_text_labels() {
        assert_eq!(StatusKind::Success.bracketed(), "[ok]");
        assert_eq!(StatusKind::Error.bracketed(), "[FAIL]");
        assert_eq!(StatusKind::Command.bracketed(), "[cmd]");
    }

    #[test]
    fn all_variants_have_unique_icons() {
        let mut icons: Vec<&str> = ALL.iter().map(|k| k.icon()).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), ALL.len());
    }

    #[test]
    fn all_variants_have_unique_brackets() {
        let mut brackets: Vec<&str> = ALL.iter().map(|k| k.bracketed()).collect();
        brackets.sort();
        brackets.dedup();
        assert_eq!(brackets.len(), ALL.len());
    }

    #[test]
    fn only_outcome_kinds_are_timestamped() {
        assert!(StatusKind::Success.timestamped());
        assert!(StatusKind::Warning.timestamped());
        assert!(StatusKind::Error.timestamped());
        assert!(!StatusKind::Info.timestamped());
        assert!(!StatusKind::Command.timestamped());
    }

    #[test]
    fn style_selects_matching_theme_slot() {
        let theme = AzlabTheme::plain();
        for kind in ALL {
            let _ = kind.style(&theme).apply_to("msg");
        }
    }
}
