//! Generated build artifacts and where they live.

use std::fmt;

use crate::domain::ProvisionConfig;

/// File name of a container build descriptor.
pub const DESCRIPTOR_FILE: &str = "Dockerfile";

/// File name of the frontend reverse-proxy configuration.
pub const PROXY_CONFIG_FILE: &str = "nginx.conf";

/// A file the provisioner writes into a source tree when it is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    FrontendDescriptor,
    ProxyConfig,
    BackendDescriptor,
    StartupScript,
}

impl Artifact {
    /// All artifacts in the order they are ensured.
    pub const ALL: [Artifact; 4] = [
        Artifact::FrontendDescriptor,
        Artifact::ProxyConfig,
        Artifact::BackendDescriptor,
        Artifact::StartupScript,
    ];

    /// Name of the embedded template that renders this artifact.
    pub fn template_name(&self) -> &'static str {
        match self {
            Artifact::FrontendDescriptor => "frontend/Dockerfile.j2",
            Artifact::ProxyConfig => "frontend/nginx.conf.j2",
            Artifact::BackendDescriptor => "backend/Dockerfile.j2",
            Artifact::StartupScript => "backend/start.sh.j2",
        }
    }

    /// Path relative to the working root.
    pub fn relative_path(&self, config: &ProvisionConfig) -> String {
        match self {
            Artifact::FrontendDescriptor => format!("{}/{}", config.frontend.dir, DESCRIPTOR_FILE),
            Artifact::ProxyConfig => format!("{}/{}", config.frontend.dir, PROXY_CONFIG_FILE),
            Artifact::BackendDescriptor => format!("{}/{}", config.backend.dir, DESCRIPTOR_FILE),
            Artifact::StartupScript => format!("{}/{}", config.backend.dir, config.startup.script),
        }
    }

    /// Whether the written file must carry the executable bit.
    pub fn is_executable(&self) -> bool {
        matches!(self, Artifact::StartupScript)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Artifact::FrontendDescriptor => "frontend Dockerfile",
            Artifact::ProxyConfig => "nginx.conf",
            Artifact::BackendDescriptor => "backend Dockerfile",
            Artifact::StartupScript => "startup script",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Result of ensuring one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    /// The file was absent and has been written.
    Created,
    /// The file already existed and was left untouched.
    Kept,
}
