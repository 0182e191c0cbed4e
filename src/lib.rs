//! Azlab - helper library for shell-driven Azure lab provisioning scripts.
//!
//! Azlab wraps the handful of things every interactive provisioning
//! script does: run an `az` (or any shell) command and inspect the
//! outcome, print emoji-coded status lines, pull values out of
//! deployment JSON, derive stable resource-name suffixes, and render
//! small template files.
//!
//! # Modules
//!
//! - [`azure`] - Resource-group and deployment-output helpers
//! - [`error`] - Error types and result aliases
//! - [`http`] - HTTP response printing
//! - [`logging`] - Tracing subscriber setup
//! - [`naming`] - Deterministic resource-name suffixes
//! - [`shell`] - Shell command execution and quoting
//! - [`template`] - Literal file templating
//! - [`ui`] - Status-line theme and reporter
//!
//! # Example
//!
//! ```no_run
//! use azlab::shell::{RunOptions, Runner};
//!
//! let runner = Runner::new();
//! let result = runner
//!     .run("exit 0", &RunOptions::with_status("ok", "bad"))
//!     .unwrap();
//! assert!(result.success);
//! ```
//!
//! Command failure is a value, not an error: a run that exits non-zero
//! comes back as `Ok` with `success = false` and the captured output
//! preserved. Only a shell that cannot be spawned is an `Err`.

pub mod azure;
pub mod error;
pub mod http;
pub mod logging;
pub mod naming;
pub mod shell;
pub mod template;
pub mod ui;

pub use error::{AzlabError, Result};
