//! Shell command execution and quoting.

pub mod command;
pub mod quote;

pub use command::{RunOptions, RunResult, Runner};
pub use quote::{quote_arg, quote_args};
