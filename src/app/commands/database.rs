//! First-run database bring-up with bounded readiness polling.

use std::time::Duration;

use crate::app::output;
use crate::domain::{AppError, DatabaseConfig, ReadinessPolicy};
use crate::ports::{OrchestratorPort, RepositoryFilesystemPort};

/// What the database step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseStatus {
    /// Initialization is turned off in configuration.
    Disabled,
    /// The data directory already holds files.
    AlreadyInitialized,
    /// The service was started and answered ready on the given probe.
    Started { attempts: u32 },
}

/// Start the database service when its data directory is absent or empty,
/// then poll until it reports ready.
///
/// Migrations are not run here; the backend startup script owns them.
pub fn ensure_database_initialized(
    orchestrator: &impl OrchestratorPort,
    filesystem: &impl RepositoryFilesystemPort,
    config: &DatabaseConfig,
    mut pause: impl FnMut(Duration),
) -> Result<DatabaseStatus, AppError> {
    if !config.enabled {
        output::info("Database initialization disabled, skipping");
        return Ok(DatabaseStatus::Disabled);
    }

    if !filesystem.is_missing_or_empty(&config.data_dir)? {
        output::info(&format!("{} already holds data, skipping initialization", config.data_dir));
        return Ok(DatabaseStatus::AlreadyInitialized);
    }

    output::info(&format!(
        "{} is missing or empty, starting '{}' service...",
        config.data_dir, config.service
    ));
    orchestrator.up_service(&config.service)?;

    let policy = ReadinessPolicy::from_config(config);
    let attempts = wait_until_ready(orchestrator, config, &policy, &mut pause)?;
    output::success(&format!("'{}' is ready", config.service));

    Ok(DatabaseStatus::Started { attempts })
}

fn wait_until_ready(
    orchestrator: &impl OrchestratorPort,
    config: &DatabaseConfig,
    policy: &ReadinessPolicy,
    pause: &mut impl FnMut(Duration),
) -> Result<u32, AppError> {
    for attempt in 1..=policy.max_attempts {
        if orchestrator.is_service_ready(&config.service, &config.health_check)? {
            tracing::debug!(service = %config.service, attempt, "service ready");
            return Ok(attempt);
        }
        if attempt < policy.max_attempts {
            let delay = policy.delay_after(attempt);
            tracing::debug!(
                service = %config.service,
                attempt,
                delay_ms = delay.as_millis() as u64,
                "service not ready, backing off"
            );
            pause(delay);
        }
    }

    Err(AppError::ServiceNotReady {
        service: config.service.clone(),
        attempts: policy.max_attempts,
    })
}
