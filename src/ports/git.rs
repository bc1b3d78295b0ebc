use std::path::Path;

use crate::domain::AppError;

/// Version-control operations needed to keep a source tree current.
pub trait GitPort {
    /// Clone `remote` into `destination` (which must not exist yet).
    fn clone_repository(&self, remote: &str, destination: &Path) -> Result<(), AppError>;

    /// Pull `branch` from `remote_name` inside an existing checkout.
    fn pull(&self, repository: &Path, remote_name: &str, branch: &str) -> Result<(), AppError>;
}
