pub mod artifact;
pub mod config;
pub mod descriptor_patch;
pub mod error;
pub mod readiness;
pub mod service;

pub use artifact::{Artifact, ArtifactStatus, DESCRIPTOR_FILE, PROXY_CONFIG_FILE};
pub use config::{
    BackendConfig, ComposeConfig, DatabaseConfig, FrontendConfig, ProvisionConfig, ProxyConfig,
    SourceRef, StartupConfig,
};
pub use descriptor_patch::{PatchOutcome, patch_launch_instruction};
pub use error::AppError;
pub use readiness::ReadinessPolicy;
pub use service::Service;
