//! Provisioning configuration domain models.

use serde::{Deserialize, Serialize};

use crate::domain::Service;

/// Configuration for a provisioning run, loaded from `provision.toml`.
///
/// Every section falls back to built-in defaults, so an empty file (or no file
/// at all) describes the stock voting-system deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvisionConfig {
    #[serde(default)]
    pub frontend: FrontendConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub compose: ComposeConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub startup: StartupConfig,
    #[serde(default)]
    pub proxy: ProxyConfig,
}

/// Borrowed view of the version-control settings shared by both services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRef<'a> {
    pub remote: &'a str,
    pub dir: &'a str,
    pub branch: &'a str,
    pub remote_name: &'a str,
}

impl ProvisionConfig {
    /// Version-control settings for one service.
    pub fn source(&self, service: Service) -> SourceRef<'_> {
        match service {
            Service::Frontend => SourceRef {
                remote: &self.frontend.remote,
                dir: &self.frontend.dir,
                branch: &self.frontend.branch,
                remote_name: &self.frontend.remote_name,
            },
            Service::Backend => SourceRef {
                remote: &self.backend.remote,
                dir: &self.backend.dir,
                branch: &self.backend.branch,
                remote_name: &self.backend.remote_name,
            },
        }
    }
}

/// Frontend repository and build settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrontendConfig {
    #[serde(default = "default_frontend_remote")]
    pub remote: String,
    #[serde(default = "default_frontend_dir")]
    pub dir: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default = "default_remote_name")]
    pub remote_name: String,
    /// Build output copied into the nginx image, relative to the build stage workdir.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
    #[serde(default = "default_frontend_url")]
    pub public_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            remote: default_frontend_remote(),
            dir: default_frontend_dir(),
            branch: default_branch(),
            remote_name: default_remote_name(),
            dist_dir: default_dist_dir(),
            public_url: default_frontend_url(),
        }
    }
}

/// Backend repository settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    #[serde(default = "default_backend_remote")]
    pub remote: String,
    #[serde(default = "default_backend_dir")]
    pub dir: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default = "default_remote_name")]
    pub remote_name: String,
    #[serde(default = "default_backend_url")]
    pub public_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            remote: default_backend_remote(),
            dir: default_backend_dir(),
            branch: default_branch(),
            remote_name: default_remote_name(),
            public_url: default_backend_url(),
        }
    }
}

/// Container orchestrator invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposeConfig {
    /// Program and leading arguments, e.g. `["docker", "compose"]`.
    #[serde(default = "default_compose_command")]
    pub command: Vec<String>,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self { command: default_compose_command() }
    }
}

/// First-run database initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_db_service")]
    pub service: String,
    /// Host directory mounted as the database volume.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Command executed inside the service (`exec -T`) to probe readiness.
    /// Set it to `[]` to only require the service to be listed as running,
    /// which does not wait for first-boot initialization to finish.
    #[serde(default = "default_health_check")]
    pub health_check: Vec<String>,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            service: default_db_service(),
            data_dir: default_data_dir(),
            health_check: default_health_check(),
            max_attempts: default_max_attempts(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
        }
    }
}

/// Backend startup script parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartupConfig {
    /// File name of the script inside the backend tree.
    #[serde(default = "default_script")]
    pub script: String,
    /// Container working directory the script is copied into.
    #[serde(default = "default_workdir")]
    pub workdir: String,
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
    #[serde(default = "default_migrate_command")]
    pub migrate_command: String,
    #[serde(default = "default_launch_command")]
    pub launch_command: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            script: default_script(),
            workdir: default_workdir(),
            delay_secs: default_delay_secs(),
            migrate_command: default_migrate_command(),
            launch_command: default_launch_command(),
        }
    }
}

impl StartupConfig {
    /// Absolute path of the script inside the backend container.
    pub fn container_path(&self) -> String {
        format!("{}/{}", self.workdir.trim_end_matches('/'), self.script)
    }
}

/// Reverse-proxy settings for the frontend nginx image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxyConfig {
    #[serde(default = "default_api_upstream")]
    pub api_upstream: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self { api_upstream: default_api_upstream() }
    }
}

fn default_frontend_remote() -> String {
    "http://192.168.100.202/warriors/voting-system-fe.git".to_string()
}

fn default_backend_remote() -> String {
    "http://192.168.100.202/warriors/voteting-system-be.git".to_string()
}

fn default_frontend_dir() -> String {
    "voting-system-fe".to_string()
}

fn default_backend_dir() -> String {
    "voting-system-be".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_remote_name() -> String {
    "origin".to_string()
}

fn default_dist_dir() -> String {
    "dist/voting-system/browser".to_string()
}

fn default_frontend_url() -> String {
    "http://localhost:4200".to_string()
}

fn default_backend_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_compose_command() -> Vec<String> {
    vec!["docker-compose".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_db_service() -> String {
    "db".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_health_check() -> Vec<String> {
    vec!["pg_isready".to_string()]
}

fn default_max_attempts() -> u32 {
    30
}

fn default_initial_backoff_ms() -> u64 {
    500
}

fn default_max_backoff_ms() -> u64 {
    5000
}

fn default_script() -> String {
    "start.sh".to_string()
}

fn default_workdir() -> String {
    "/app".to_string()
}

fn default_delay_secs() -> u64 {
    10
}

fn default_migrate_command() -> String {
    "npx prisma migrate deploy".to_string()
}

fn default_launch_command() -> String {
    "npm run dev".to_string()
}

fn default_api_upstream() -> String {
    "http://server:3000".to_string()
}
