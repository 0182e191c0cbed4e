//! Shell argument quoting.
//!
//! `run` takes a raw command line and trusts its caller; the helpers in
//! this crate that *compose* command lines (see [`crate::azure`]) quote
//! every interpolated value with these functions so a resource name like
//! `it's-a-lab` cannot break out of the command.

/// Quote a single argument for POSIX shell execution.
///
/// Plain words pass through unchanged; anything containing shell
/// metacharacters is wrapped in single quotes with embedded quotes
/// escaped as `'\''`.
pub fn quote_arg(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }

    const SHELL_META: &[char] = &[
        ' ', '\t', '\n', '\'', '"', '\\', '$', '`', '!', '*', '?', '[', ']', '(', ')', '{', '}',
        '<', '>', '|', '&', ';', '#', '~',
    ];

    if !arg.contains(SHELL_META) {
        return arg.to_string();
    }

    format!("'{}'", arg.replace('\'', "'\\''"))
}

/// Quote and join multiple arguments into a command-line fragment.
pub fn quote_args<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|a| quote_arg(a.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
