//! Clone or update a service source tree.

use crate::app::output;
use crate::domain::{AppError, ProvisionConfig, Service};
use crate::ports::{GitPort, RepositoryFilesystemPort};

/// What happened to a source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The directory was absent and the remote was cloned into it.
    Cloned,
    /// The directory existed and its branch was pulled.
    Pulled,
}

/// Bring one service checkout up to date.
///
/// An existing directory is pulled in place; a missing one is cloned.
/// Exactly one git invocation happens either way.
pub fn sync_source_tree(
    git: &impl GitPort,
    filesystem: &impl RepositoryFilesystemPort,
    config: &ProvisionConfig,
    service: Service,
) -> Result<SyncOutcome, AppError> {
    let source = config.source(service);
    let path = filesystem.resolve_path(source.dir);

    if filesystem.is_dir(source.dir) {
        output::info(&format!(
            "{} checkout exists, pulling {}/{}...",
            service, source.remote_name, source.branch
        ));
        git.pull(&path, source.remote_name, source.branch)?;
        output::success(&format!("{} updated", source.dir));
        Ok(SyncOutcome::Pulled)
    } else {
        output::info(&format!("{} checkout missing, cloning {}...", service, source.remote));
        git.clone_repository(source.remote, &path)?;
        output::success(&format!("{} cloned", source.dir));
        Ok(SyncOutcome::Cloned)
    }
}
