mod git;
mod orchestrator;
mod repository_filesystem;

pub use git::GitPort;
pub use orchestrator::OrchestratorPort;
pub use repository_filesystem::RepositoryFilesystemPort;
