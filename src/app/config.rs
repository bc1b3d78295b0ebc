//! Provisioning configuration loading.

use std::path::Path;

use crate::domain::config::{self, paths};
use crate::domain::{AppError, ProvisionConfig};

/// Resolve the effective configuration for a working root.
///
/// An explicit path must exist. Without one, `<root>/provision.toml` is used
/// when present and built-in defaults otherwise.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ProvisionConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let default_path = paths::config(root);
            if !default_path.is_file() {
                tracing::debug!(path = %default_path.display(), "no config file, using defaults");
                let defaults = ProvisionConfig::default();
                config::validate_config(&defaults)?;
                return Ok(defaults);
            }
            default_path
        }
    };

    tracing::debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(&path)?;
    config::parse_config_content(&content).map_err(|err| match err {
        AppError::TomlParse(e) => {
            AppError::config_error(format!("Invalid {}: {}", path.display(), e))
        }
        other => other,
    })
}
