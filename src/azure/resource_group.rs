//! Resource group orchestration.

use crate::error::Result;
use crate::shell::{quote_arg, RunOptions, Runner};

/// Make sure a resource group is available before a deployment.
///
/// Probes the group with `az group show`. When `create_resources` is
/// set, the group is created only if the probe failed; otherwise the
/// helper just reports whether the group exists. An empty name prints a
/// warning and returns without probing.
///
/// # Errors
///
/// Propagates only spawn failures from the underlying runner; an `az`
/// command that exits non-zero is handled by reporting.
pub fn ensure_resource_group(
    runner: &Runner,
    create_resources: bool,
    name: &str,
    location: &str,
) -> Result<()> {
    if name.is_empty() {
        runner
            .reporter()
            .warning("Please specify the resource group name");
        return Ok(());
    }

    let probe = runner.run(&group_show_command(name), &RunOptions::default())?;

    if create_resources {
        if probe.success {
            runner
                .reporter()
                .info(&format!("Using existing resource group '{}'", name));
        } else {
            runner.run(
                &group_create_command(name, location),
                &RunOptions::with_status(
                    format!("Resource group '{}' created", name),
                    format!("Failed to create the resource group '{}'", name),
                ),
            )?;
        }
    } else if probe.success {
        runner
            .reporter()
            .info(&format!("Using resource group '{}'", name));
    } else {
        runner
            .reporter()
            .error(&format!("Resource group '{}' does not exist", name));
    }

    Ok(())
}

fn group_show_command(name: &str) -> String {
    format!("az group show --name {}", quote_arg(name))
}

fn group_create_command(name: &str, location: &str) -> String {
    format!(
        "az group create --name {} --location {}",
        quote_arg(name),
        quote_arg(location)
    )
}
