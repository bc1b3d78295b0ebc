use std::io;

use thiserror::Error;

/// Library-wide error type for provisioner operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Path escapes the working root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// An orchestrator command exited unsuccessfully or could not be spawned.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },

    /// Template registration or rendering failed.
    #[error("Template error: {0}")]
    Template(String),

    /// Readiness polling gave up on a service.
    #[error("Service '{service}' did not become ready after {attempts} attempt(s)")]
    ServiceNotReady { service: String, attempts: u32 },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
