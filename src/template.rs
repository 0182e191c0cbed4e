//! Literal file templating.
//!
//! Templates use `{name}` placeholders with `{{` and `}}` as literal
//! braces. This is deliberate literal substitution, not a templating
//! engine: no conditionals, no loops, no nested lookups.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use azlab::template::render_str;
//!
//! let mut vars = HashMap::new();
//! vars.insert("name".to_string(), "world".to_string());
//! assert_eq!(render_str("hello {name}", &vars).unwrap(), "hello world");
//! ```

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::{AzlabError, Result};

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text (brace escapes already unescaped).
    Literal(String),
    /// Placeholder reference: {name}
    Placeholder(String),
}

/// Parse a template into literal and placeholder segments.
///
/// # Errors
///
/// Fails on an unterminated `{placeholder` or an unmatched `}`.
pub fn parse_template(input: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    let mut literal = String::new();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    literal.push('{');
                    continue;
                }

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }

                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(AzlabError::TemplateParse {
                        message: format!("unterminated placeholder: {{{}", name),
                    });
                }
                segments.push(Segment::Placeholder(name));
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    literal.push('}');
                } else {
                    return Err(AzlabError::TemplateParse {
                        message: "unmatched '}'".to_string(),
                    });
                }
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}

/// Extract the unique placeholder names referenced by a template.
pub fn placeholders(input: &str) -> Result<HashSet<String>> {
    Ok(parse_template(input)?
        .into_iter()
        .filter_map(|seg| match seg {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect())
}

/// Render a template string against the supplied values.
///
/// # Errors
///
/// Returns [`AzlabError::UnresolvedPlaceholder`] if the template
/// references a name with no supplied value.
pub fn render_str(input: &str, vars: &HashMap<String, String>) -> Result<String> {
    let mut result = String::new();

    for segment in parse_template(input)? {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Placeholder(name) => {
                let value = vars
                    .get(&name)
                    .ok_or(AzlabError::UnresolvedPlaceholder { name })?;
                result.push_str(value);
            }
        }
    }

    Ok(result)
}

/// Render a named template file into a target directory.
///
/// Reads `<source_dir>/<filename>`, substitutes the supplied values, and
/// writes the result to `<target_dir>/<filename>`, creating the target
/// directory if needed. Returns the path of the written file.
///
/// # Errors
///
/// A missing source file and filesystem failures propagate; an
/// unsupplied placeholder is [`AzlabError::UnresolvedPlaceholder`].
pub fn render_file(
    filename: &str,
    source_dir: &Path,
    target_dir: &Path,
    vars: &HashMap<String, String>,
) -> Result<PathBuf> {
    let source = source_dir.join(filename);
    let content = std::fs::read_to_string(&source)
        .with_context(|| format!("Failed to read template {}", source.display()))?;

    let rendered = render_str(&content, vars)?;

    std::fs::create_dir_all(target_dir)?;
    let target = target_dir.join(filename);
    std::fs::write(&target, rendered)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    tracing::debug!(template = filename, target = %target.display(), "rendered template");
    Ok(target)
}
