//! Create-if-absent generation of build descriptors, proxy config and startup script.

use std::path::Path;

use crate::adapters::assets::ArtifactTemplates;
use crate::app::output;
use crate::domain::{AppError, Artifact, ArtifactStatus, ProvisionConfig};
use crate::ports::RepositoryFilesystemPort;

/// Write `artifact` from its template unless the file already exists.
///
/// Existing files are never overwritten. Executable artifacts get their mode
/// (re)applied either way so a checkout that lost the bit still launches.
pub fn ensure_artifact(
    filesystem: &impl RepositoryFilesystemPort,
    templates: &ArtifactTemplates,
    config: &ProvisionConfig,
    artifact: Artifact,
) -> Result<ArtifactStatus, AppError> {
    let path = artifact.relative_path(config);

    if filesystem.file_exists(&path) {
        if artifact.is_executable() {
            filesystem.set_executable(&path)?;
        }
        output::info(&format!("{} already present at {}", artifact, path));
        return Ok(ArtifactStatus::Kept);
    }

    if let Some(parent) = Path::new(&path).parent().and_then(Path::to_str)
        && !parent.is_empty()
        && !filesystem.is_dir(parent)
    {
        return Err(AppError::config_error(format!(
            "Cannot write {}: source directory '{}' does not exist",
            artifact, parent
        )));
    }

    output::info(&format!("Creating {}...", artifact));
    let content = templates.render(artifact, config)?;
    filesystem.write_file(&path, &content)?;
    if artifact.is_executable() {
        filesystem.set_executable(&path)?;
    }
    output::success(&format!("{} created at {}", artifact, path));

    Ok(ArtifactStatus::Created)
}

/// Frontend `Dockerfile` plus its `nginx.conf`.
pub fn ensure_frontend_descriptor(
    filesystem: &impl RepositoryFilesystemPort,
    templates: &ArtifactTemplates,
    config: &ProvisionConfig,
) -> Result<Vec<(Artifact, ArtifactStatus)>, AppError> {
    [Artifact::FrontendDescriptor, Artifact::ProxyConfig]
        .into_iter()
        .map(|artifact| Ok((artifact, ensure_artifact(filesystem, templates, config, artifact)?)))
        .collect()
}

/// Backend `Dockerfile`.
pub fn ensure_backend_descriptor(
    filesystem: &impl RepositoryFilesystemPort,
    templates: &ArtifactTemplates,
    config: &ProvisionConfig,
) -> Result<ArtifactStatus, AppError> {
    ensure_artifact(filesystem, templates, config, Artifact::BackendDescriptor)
}

/// Backend startup script (wait, migrate, launch), marked executable.
pub fn ensure_startup_script(
    filesystem: &impl RepositoryFilesystemPort,
    templates: &ArtifactTemplates,
    config: &ProvisionConfig,
) -> Result<ArtifactStatus, AppError> {
    ensure_artifact(filesystem, templates, config, Artifact::StartupScript)
}
