//! Deployment output extraction.
//!
//! `az deployment group create` returns a JSON document with the
//! declared outputs nested under `properties.outputs.<name>.value`.

use serde_json::Value;

use crate::shell::RunResult;
use crate::ui::Reporter;

/// Extract a named output value from a deployment result.
///
/// Returns `None` (after reporting an error) on any structural mismatch:
/// output that was not JSON, a missing `properties`/`outputs` level, or
/// an unknown output name. With a label, the value is also printed as an
/// info line.
pub fn deployment_output(
    reporter: &Reporter,
    result: &RunResult,
    property: &str,
    label: Option<&str>,
) -> Option<Value> {
    let value = result
        .json
        .as_ref()
        .and_then(|json| json.get("properties"))
        .and_then(|properties| properties.get("outputs"))
        .and_then(|outputs| outputs.get(property))
        .and_then(|entry| entry.get("value"))
        .cloned();

    match value {
        Some(value) => {
            if let Some(label) = label {
                reporter.info(&format!("{}: {}", label, display_value(&value)));
            }
            Some(value)
        }
        None => {
            reporter.error(&format!(
                "Failed to retrieve output property: '{}'",
                property
            ));
            None
        }
    }
}

/// Render a JSON value for a status line (strings without quotes).
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
