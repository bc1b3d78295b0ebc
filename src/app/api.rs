//! Public library API.
//!
//! Each entry point wires the production adapters for a working root and runs
//! one command.

use std::path::Path;

use crate::adapters::compose::ComposeCommandAdapter;
use crate::adapters::filesystem::FilesystemStore;
use crate::adapters::git::GitCommandAdapter;
use crate::app::AppContext;
use crate::app::commands::provision::{self, ProvisionMode, ProvisionReport};
use crate::app::config::load_config;
use crate::domain::{AppError, ProvisionConfig};

/// Sync sources, generate build files, initialize the database and start all containers.
pub fn up(root: &Path, config_path: Option<&Path>) -> Result<ProvisionReport, AppError> {
    run(root, config_path, ProvisionMode::Up)
}

/// Sync sources and generate build files without touching containers.
pub fn scaffold(root: &Path, config_path: Option<&Path>) -> Result<ProvisionReport, AppError> {
    run(root, config_path, ProvisionMode::Scaffold)
}

/// The configuration a run in `root` would use.
pub fn effective_config(
    root: &Path,
    config_path: Option<&Path>,
) -> Result<ProvisionConfig, AppError> {
    load_config(root, config_path)
}

fn run(
    root: &Path,
    config_path: Option<&Path>,
    mode: ProvisionMode,
) -> Result<ProvisionReport, AppError> {
    if !root.is_dir() {
        return Err(AppError::config_error(format!(
            "Working directory does not exist: {}",
            root.display()
        )));
    }

    let root = root.canonicalize()?;
    let config = load_config(&root, config_path)?;
    let ctx = AppContext::new(
        GitCommandAdapter::new(root.clone()),
        ComposeCommandAdapter::new(root.clone(), &config.compose.command)?,
        FilesystemStore::new(root),
    );

    provision::execute(&ctx, &config, mode)
}
