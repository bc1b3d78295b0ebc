//! Tear down and rebuild the container set.

use crate::app::output;
use crate::domain::AppError;
use crate::ports::OrchestratorPort;

/// `down`, then `up -d --build`. Either failure aborts.
pub fn launch_system(orchestrator: &impl OrchestratorPort) -> Result<(), AppError> {
    output::info("Stopping running containers...");
    orchestrator.down()?;

    output::info("Rebuilding and starting containers...");
    orchestrator.up_build_detached()?;

    output::success("Containers are up");
    Ok(())
}
