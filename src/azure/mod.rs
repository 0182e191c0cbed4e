//! Azure orchestration helpers built on the command runner.

pub mod deployment;
pub mod resource_group;

pub use deployment::deployment_output;
pub use resource_group::ensure_resource_group;
