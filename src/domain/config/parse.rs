//! Pure parse/validate for provisioning configuration (`provision.toml`).

use std::path::{Component, Path};

use crate::domain::{AppError, ProvisionConfig, Service};

/// Parse and validate provisioning configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ProvisionConfig, AppError> {
    let config: ProvisionConfig = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Check cross-field constraints that serde cannot express.
pub fn validate_config(config: &ProvisionConfig) -> Result<(), AppError> {
    for service in Service::ALL {
        let source = config.source(service);
        let label = service.label();

        if source.remote.trim().is_empty() {
            return Err(AppError::config_error(format!("{label}.remote must not be empty")));
        }
        if source.branch.trim().is_empty() {
            return Err(AppError::config_error(format!("{label}.branch must not be empty")));
        }
        if source.remote_name.trim().is_empty() {
            return Err(AppError::config_error(format!("{label}.remote_name must not be empty")));
        }
        if !is_contained_relative(source.dir) {
            return Err(AppError::config_error(format!(
                "{label}.dir must be a relative path inside the working root: '{}'",
                source.dir
            )));
        }
    }

    if normalize(&config.frontend.dir) == normalize(&config.backend.dir) {
        return Err(AppError::config_error(
            "frontend.dir and backend.dir must point at different directories",
        ));
    }

    if config.compose.command.is_empty() || config.compose.command[0].trim().is_empty() {
        return Err(AppError::config_error("compose.command must name a program"));
    }

    if !is_contained_relative(&config.database.data_dir) {
        return Err(AppError::config_error(format!(
            "database.data_dir must be a relative path inside the working root: '{}'",
            config.database.data_dir
        )));
    }
    if config.database.service.trim().is_empty() {
        return Err(AppError::config_error("database.service must not be empty"));
    }
    if config.database.health_check.first().is_some_and(|program| program.trim().is_empty()) {
        return Err(AppError::config_error("database.health_check must start with a program"));
    }
    if config.database.max_attempts == 0 {
        return Err(AppError::config_error("database.max_attempts must be greater than 0"));
    }
    if config.database.initial_backoff_ms > config.database.max_backoff_ms {
        return Err(AppError::config_error(
            "database.initial_backoff_ms must not exceed database.max_backoff_ms",
        ));
    }

    let script = Path::new(&config.startup.script);
    let is_bare_name = matches!(
        script.components().collect::<Vec<_>>().as_slice(),
        [Component::Normal(_)]
    );
    if !is_bare_name {
        return Err(AppError::config_error(format!(
            "startup.script must be a bare file name: '{}'",
            config.startup.script
        )));
    }
    if !config.startup.workdir.starts_with('/') {
        return Err(AppError::config_error("startup.workdir must be an absolute container path"));
    }
    if config.startup.launch_command.trim().is_empty() {
        return Err(AppError::config_error("startup.launch_command must not be empty"));
    }

    Ok(())
}

/// True for non-empty relative paths that never climb above their base.
fn is_contained_relative(path: &str) -> bool {
    if path.trim().is_empty() {
        return false;
    }
    let mut depth = 0usize;
    for component in Path::new(path).components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    depth > 0
}

fn normalize(path: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in Path::new(path).components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().to_string()),
            Component::ParentDir => {
                parts.pop();
            }
            _ => {}
        }
    }
    parts
}
