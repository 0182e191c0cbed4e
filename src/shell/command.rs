//! Shell command execution.
//!
//! [`Runner::run`] is the single entry point used by provisioning
//! scripts: it blocks on one external command, captures its combined
//! output, prints an optional status line, and returns a [`RunResult`].
//! A non-zero exit is a result, not an error; the only `Err` is a shell
//! that cannot be spawned at all.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{AzlabError, Result};
use crate::ui::{Reporter, StatusKind};

/// Result of executing one shell command.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Whether the command exited with status 0.
    pub success: bool,

    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Combined stdout and stderr, lossily decoded as UTF-8.
    ///
    /// Stdout comes first, then stderr; the two streams are captured on
    /// separate pipes, so cross-stream interleaving is not preserved.
    pub output: String,

    /// Best-effort JSON parse of `output`, computed once at construction.
    ///
    /// `None` means the output was not valid JSON; that is not an error.
    pub json: Option<serde_json::Value>,

    /// Wall-clock execution duration.
    pub duration: Duration,
}

impl RunResult {
    fn new(success: bool, exit_code: Option<i32>, output: String, duration: Duration) -> Self {
        let json = serde_json::from_str(&output).ok();
        Self {
            success,
            exit_code,
            output,
            json,
            duration,
        }
    }
}

/// Options controlling status-line printing for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Status label printed on success (with duration tag).
    pub ok_message: Option<String>,

    /// Status label printed on failure (with duration tag and output).
    pub error_message: Option<String>,

    /// Append the captured output to the status line even on success.
    pub echo_output: bool,

    /// Echo the command itself before execution.
    pub echo_command: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            ok_message: None,
            error_message: None,
            echo_output: false,
            echo_command: true,
        }
    }
}

impl RunOptions {
    /// Options that print a status line: `ok` on success, `err` on failure.
    pub fn with_status(ok: impl Into<String>, err: impl Into<String>) -> Self {
        Self {
            ok_message: Some(ok.into()),
            error_message: Some(err.into()),
            ..Default::default()
        }
    }

    /// Options that print nothing (no command echo, no status line).
    pub fn silent() -> Self {
        Self {
            echo_command: false,
            ..Default::default()
        }
    }
}

/// Executes shell commands and reports their status.
///
/// # Example
///
/// ```no_run
/// use azlab::shell::{RunOptions, Runner};
///
/// let runner = Runner::new();
/// let result = runner
///     .run(
///         "az aks show --name falco-lab",
///         &RunOptions::with_status("Cluster found", "Cluster lookup failed"),
///     )
///     .unwrap();
/// if result.success {
///     println!("{:?}", result.json);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Runner {
    reporter: Reporter,
}

impl Runner {
    /// Create a runner with a terminal-detected reporter.
    pub fn new() -> Self {
        Self {
            reporter: Reporter::new(),
        }
    }

    /// Create a runner that reports through the given reporter.
    pub fn with_reporter(reporter: Reporter) -> Self {
        Self { reporter }
    }

    /// The reporter this runner prints through.
    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Execute a shell command synchronously.
    ///
    /// # Errors
    ///
    /// Returns [`AzlabError::CommandSpawn`] only if the shell process
    /// cannot be started. A command that runs and exits non-zero is
    /// returned as `Ok` with `success = false`.
    pub fn run(&self, command: &str, options: &RunOptions) -> Result<RunResult> {
        if options.echo_command {
            self.reporter.command(command);
        }
        tracing::debug!(command, "executing shell command");

        let start = Instant::now();
        let output = Command::new(detect_shell())
            .arg(shell_flag())
            .arg(command)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| AzlabError::CommandSpawn {
                command: command.to_string(),
                source,
            })?;
        let duration = start.elapsed();

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        let success = output.status.success();
        tracing::debug!(
            success,
            code = output.status.code(),
            elapsed_ms = duration.as_millis() as u64,
            "command finished"
        );

        if options.ok_message.is_some() || options.error_message.is_some() {
            let (kind, message) = if success {
                (StatusKind::Success, options.ok_message.as_deref())
            } else {
                (StatusKind::Error, options.error_message.as_deref())
            };
            let shown = if !success || options.echo_output {
                combined.as_str()
            } else {
                ""
            };
            self.reporter
                .status_with(kind, message.unwrap_or(""), shown, Some(duration));
        }

        Ok(RunResult::new(
            success,
            output.status.code(),
            combined,
            duration,
        ))
    }

    /// Execute a command with no console output at all.
    pub fn run_quiet(&self, command: &str) -> Result<RunResult> {
        self.run(command, &RunOptions::silent())
    }
}

/// Detect the shell to execute commands with.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Flag that passes a command string to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
