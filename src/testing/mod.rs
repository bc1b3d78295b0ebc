
pub use ports::{FakeGit, FakeOrchestrator, GitCall, MockRepositoryFs, TestFiles};
