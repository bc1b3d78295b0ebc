use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::OrchestratorPort;

/// `OrchestratorPort` double that records calls as short strings.
///
/// Recorded forms: `down`, `up --build`, `up <service>`, `ready? <service>`.
#[derive(Debug, Default)]
pub struct FakeOrchestrator {
    pub calls: Mutex<Vec<String>>,
    /// Recorded call form that should fail.
    pub fail_on: Mutex<Option<String>>,
    /// Number of readiness probes answered "not ready" before reporting ready.
    pub not_ready_probes: Mutex<u32>,
}

impl FakeOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(&self, call: &str) {
        *self.fail_on.lock().unwrap() = Some(call.to_string());
    }

    pub fn ready_after(&self, probes: u32) {
        *self.not_ready_probes.lock().unwrap() = probes;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call.clone());
        if self.fail_on.lock().unwrap().as_deref() == Some(call.as_str()) {
            return Err(AppError::CommandFailed { command: call, details: "exit status: 1".into() });
        }
        Ok(())
    }
}

impl OrchestratorPort for FakeOrchestrator {
    fn down(&self) -> Result<(), AppError> {
        self.record("down".into())
    }

    fn up_build_detached(&self) -> Result<(), AppError> {
        self.record("up --build".into())
    }

    fn up_service(&self, service: &str) -> Result<(), AppError> {
        self.record(format!("up {service}"))
    }

    fn is_service_ready(&self, service: &str, _health_check: &[String]) -> Result<bool, AppError> {
        self.record(format!("ready? {service}"))?;
        let mut remaining = self.not_ready_probes.lock().unwrap();
        if *remaining > 0 {
            *remaining -= 1;
            return Ok(false);
        }
        Ok(true)
    }
}
