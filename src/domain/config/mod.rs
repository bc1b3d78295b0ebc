pub mod parse;
pub mod paths;
pub mod provision;

pub use parse::{parse_config_content, validate_config};
pub use provision::{
    BackendConfig, ComposeConfig, DatabaseConfig, FrontendConfig, ProvisionConfig, ProxyConfig,
    SourceRef, StartupConfig,
};
