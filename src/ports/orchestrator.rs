use crate::domain::AppError;

/// Container orchestrator operations (docker-compose style).
pub trait OrchestratorPort {
    /// Stop and remove the running container set.
    fn down(&self) -> Result<(), AppError>;

    /// Rebuild images and start every service detached.
    fn up_build_detached(&self) -> Result<(), AppError>;

    /// Start a single named service detached.
    fn up_service(&self, service: &str) -> Result<(), AppError>;

    /// Probe whether a service is ready.
    ///
    /// The `health_check` command is executed inside the service and must exit 0.
    /// When it is empty the service only has to be listed as running.
    /// A failing probe is `Ok(false)`; `Err` is reserved for not being able to ask.
    fn is_service_ready(&self, service: &str, health_check: &[String]) -> Result<bool, AppError>;
}
