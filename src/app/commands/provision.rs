//! The full provisioning workflow.
//!
//! Steps run in a fixed order and every failure aborts the run. Re-running
//! from scratch is safe: each step either skips work that is already done or
//! repeats an idempotent external command.

use crate::adapters::assets::ArtifactTemplates;
use crate::app::AppContext;
use crate::app::output;
use crate::domain::{AppError, Artifact, ArtifactStatus, ProvisionConfig, Service};
use crate::ports::{GitPort, OrchestratorPort, RepositoryFilesystemPort};

use super::artifacts::{
    ensure_backend_descriptor, ensure_frontend_descriptor, ensure_startup_script,
};
use super::database::{DatabaseStatus, ensure_database_initialized};
use super::launch::launch_system;
use super::patch_descriptor::{PatchStatus, patch_backend_descriptor};
use super::sync_sources::{SyncOutcome, sync_source_tree};

/// Which part of the workflow to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionMode {
    /// Sources and generated files only; no container commands.
    Scaffold,
    /// Everything, ending with the containers running.
    Up,
}

impl ProvisionMode {
    fn total_steps(&self) -> usize {
        match self {
            ProvisionMode::Scaffold => 4,
            ProvisionMode::Up => 6,
        }
    }
}

/// Summary of a provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub sources: Vec<(Service, SyncOutcome)>,
    pub artifacts: Vec<(Artifact, ArtifactStatus)>,
    pub patch: PatchStatus,
    pub database: Option<DatabaseStatus>,
    pub launched: bool,
    /// Paths of artifacts written during this run.
    pub created: Vec<String>,
}

/// Run the workflow against the given context.
pub fn execute<G, O, F>(
    ctx: &AppContext<G, O, F>,
    config: &ProvisionConfig,
    mode: ProvisionMode,
) -> Result<ProvisionReport, AppError>
where
    G: GitPort,
    O: OrchestratorPort,
    F: RepositoryFilesystemPort,
{
    let total = mode.total_steps();
    let templates = ArtifactTemplates::load()?;
    let fs = ctx.filesystem();

    let mut sources = Vec::with_capacity(Service::ALL.len());
    for (index, service) in Service::ALL.into_iter().enumerate() {
        output::step(index + 1, total, &format!("{} source", service));
        sources.push((service, sync_source_tree(ctx.git(), fs, config, service)?));
    }

    output::step(3, total, "Frontend Dockerfile");
    let mut artifacts = ensure_frontend_descriptor(fs, &templates, config)?;

    output::step(4, total, "Backend Dockerfile and startup script");
    artifacts.push((Artifact::BackendDescriptor, ensure_backend_descriptor(fs, &templates, config)?));
    artifacts.push((Artifact::StartupScript, ensure_startup_script(fs, &templates, config)?));
    let patch = patch_backend_descriptor(fs, config)?;

    let created = artifacts
        .iter()
        .filter(|(_, status)| *status == ArtifactStatus::Created)
        .map(|(artifact, _)| artifact.relative_path(config))
        .collect();
    let mut report =
        ProvisionReport { sources, artifacts, patch, database: None, launched: false, created };
    if mode == ProvisionMode::Scaffold {
        return Ok(report);
    }

    output::step(5, total, "Database");
    report.database =
        Some(ensure_database_initialized(ctx.orchestrator(), fs, &config.database, ctx.pause())?);

    output::step(6, total, "Rebuild and start containers");
    launch_system(ctx.orchestrator())?;
    report.launched = true;

    output::info(&format!("Frontend: {}", config.frontend.public_url));
    output::info(&format!("Backend API: {}", config.backend.public_url));

    Ok(report)
}
