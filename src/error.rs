//! Error types for azlab operations.
//!
//! This module defines [`AzlabError`], the primary error type used throughout
//! the library, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Expected operational failures (a command exiting non-zero, output that
//!   is not JSON, a missing deployment output) are *values*: callers inspect
//!   a `RunResult` or an `Option`, no error is raised.
//! - Fatal failures (a shell that cannot be spawned, filesystem errors, a
//!   missing template file) are `AzlabError` and propagate to the caller.

use thiserror::Error;

/// Core error type for azlab operations.
#[derive(Debug, Error)]
pub enum AzlabError {
    /// The shell process itself could not be spawned.
    #[error("Failed to spawn shell for command: {command}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A template could not be parsed (e.g., unterminated placeholder).
    #[error("Invalid template: {message}")]
    TemplateParse { message: String },

    /// A template references a placeholder with no supplied value.
    #[error("Unresolved placeholder: {{{name}}}")]
    UnresolvedPlaceholder { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for azlab operations.
pub type Result<T> = std::result::Result<T, AzlabError>;
