//! provisioner: sync service repositories, scaffold container builds, and start the stack.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use app::commands::database::DatabaseStatus;
pub use app::commands::patch_descriptor::PatchStatus;
pub use app::commands::provision::{ProvisionMode, ProvisionReport};
pub use app::commands::sync_sources::SyncOutcome;
pub use domain::{AppError, Artifact, ArtifactStatus, ProvisionConfig, Service};

/// Run the full workflow in `root`: sources, build files, database, containers.
pub fn up(root: &Path, config_path: Option<&Path>) -> Result<ProvisionReport, AppError> {
    app::api::up(root, config_path)
}

/// Sync sources and write missing build files in `root`, without container commands.
pub fn scaffold(root: &Path, config_path: Option<&Path>) -> Result<ProvisionReport, AppError> {
    app::api::scaffold(root, config_path)
}

/// Resolve the configuration a run in `root` would use.
pub fn effective_config(
    root: &Path,
    config_path: Option<&Path>,
) -> Result<ProvisionConfig, AppError> {
    app::api::effective_config(root, config_path)
}
