//! Tracing subscriber setup for script binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for a provisioning script.
///
/// Log level is controlled by:
/// 1. `debug = true` sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("azlab=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("azlab=info"))
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();
}
