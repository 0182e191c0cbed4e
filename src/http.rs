//! HTTP response printing.
//!
//! Labs finish by probing the endpoint they just deployed; this module
//! prints the probe response in the same status-line vocabulary as the
//! rest of the crate.

use anyhow::Context;
use reqwest::blocking::Response;

use crate::error::Result;
use crate::ui::Reporter;

/// Print an HTTP response: headers, then the body.
///
/// On status 200 the body is pretty-printed as indented JSON (or printed
/// raw with a warning if it does not parse); any other status prints a
/// warning line followed by the raw body.
///
/// # Errors
///
/// Propagates a failure to read the response body.
pub fn print_response(reporter: &Reporter, response: Response) -> Result<()> {
    let status = response.status();

    println!("Response headers:");
    for (name, value) in response.headers() {
        println!("  {}: {}", name, value.to_str().unwrap_or("<binary>"));
    }

    let body = response
        .text()
        .context("Failed to read response body")?;

    if status == reqwest::StatusCode::OK {
        reporter.success(&format!("Status Code: {}", status.as_u16()));
        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(json) => {
                let pretty = serde_json::to_string_pretty(&json)
                    .context("Failed to render response JSON")?;
                println!("{}", pretty);
            }
            Err(_) => {
                reporter.warning("Response body is not JSON");
                println!("{}", body);
            }
        }
    } else {
        reporter.warning(&format!("Status Code: {}", status.as_u16()));
        println!("{}", body);
    }

    Ok(())
}
