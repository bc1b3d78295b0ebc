//! Point the backend descriptor at the startup script.

use crate::app::output;
use crate::domain::{AppError, Artifact, PatchOutcome, ProvisionConfig, patch_launch_instruction};
use crate::ports::RepositoryFilesystemPort;

/// What the patch step did to the backend descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStatus {
    Patched,
    AlreadyPatched,
    LaunchInstructionMissing,
    DescriptorMissing,
}

/// Rewrite the backend descriptor's launch instruction to run the startup script.
///
/// Writes only when the descriptor exists and does not already mention the script.
pub fn patch_backend_descriptor(
    filesystem: &impl RepositoryFilesystemPort,
    config: &ProvisionConfig,
) -> Result<PatchStatus, AppError> {
    let path = Artifact::BackendDescriptor.relative_path(config);
    if !filesystem.file_exists(&path) {
        output::warning(&format!("{} not found, skipping startup script patch", path));
        return Ok(PatchStatus::DescriptorMissing);
    }

    let content = filesystem.read_file(&path)?;
    match patch_launch_instruction(&content, &config.startup) {
        PatchOutcome::Patched(patched) => {
            filesystem.write_file(&path, &patched)?;
            output::success(&format!("{} now launches via {}", path, config.startup.script));
            Ok(PatchStatus::Patched)
        }
        PatchOutcome::AlreadyPatched => {
            output::info(&format!("{} already uses {}", path, config.startup.script));
            Ok(PatchStatus::AlreadyPatched)
        }
        PatchOutcome::LaunchInstructionMissing => {
            output::warning(&format!("{} has no CMD instruction to replace", path));
            Ok(PatchStatus::LaunchInstructionMissing)
        }
    }
}
