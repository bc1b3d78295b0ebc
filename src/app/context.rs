use std::time::Duration;

use crate::ports::{GitPort, OrchestratorPort, RepositoryFilesystemPort};

/// Application context holding the external systems a provisioning run talks to.
pub struct AppContext<G: GitPort, O: OrchestratorPort, F: RepositoryFilesystemPort> {
    git: G,
    orchestrator: O,
    filesystem: F,
    pause: fn(Duration),
}

impl<G: GitPort, O: OrchestratorPort, F: RepositoryFilesystemPort> AppContext<G, O, F> {
    /// Create a new application context that waits with `std::thread::sleep`.
    pub fn new(git: G, orchestrator: O, filesystem: F) -> Self {
        Self { git, orchestrator, filesystem, pause: std::thread::sleep }
    }

    /// Replace the function used to wait between readiness probes.
    pub fn with_pause(mut self, pause: fn(Duration)) -> Self {
        self.pause = pause;
        self
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn orchestrator(&self) -> &O {
        &self.orchestrator
    }

    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    pub fn pause(&self) -> fn(Duration) {
        self.pause
    }
}
