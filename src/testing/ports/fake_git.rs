use std::path::Path;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::GitPort;

use super::test_files::TestFiles;

/// A recorded version-control invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Clone { remote: String, destination: String },
    Pull { repository: String, remote_name: String, branch: String },
}

/// `GitPort` double that records calls and materializes clones into `TestFiles`.
#[derive(Debug, Default)]
pub struct FakeGit {
    files: TestFiles,
    pub calls: Mutex<Vec<GitCall>>,
    /// When set, every call fails with this message.
    pub failure: Mutex<Option<String>>,
}

impl FakeGit {
    pub fn new(files: TestFiles) -> Self {
        Self { files, calls: Mutex::new(Vec::new()), failure: Mutex::new(None) }
    }

    pub fn fail_with(&self, details: &str) {
        *self.failure.lock().unwrap() = Some(details.to_string());
    }

    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.lock().unwrap().clone()
    }

    fn check_failure(&self, command: String) -> Result<(), AppError> {
        match self.failure.lock().unwrap().as_ref() {
            Some(details) => Err(AppError::GitError { command, details: details.clone() }),
            None => Ok(()),
        }
    }
}

impl GitPort for FakeGit {
    fn clone_repository(&self, remote: &str, destination: &Path) -> Result<(), AppError> {
        let destination = destination.to_string_lossy().to_string();
        self.calls
            .lock()
            .unwrap()
            .push(GitCall::Clone { remote: remote.to_string(), destination: destination.clone() });
        self.check_failure(format!("git clone {} {}", remote, destination))?;

        self.files.add(&format!("{}/package.json", destination), "{}\n");
        Ok(())
    }

    fn pull(&self, repository: &Path, remote_name: &str, branch: &str) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(GitCall::Pull {
            repository: repository.to_string_lossy().to_string(),
            remote_name: remote_name.to_string(),
            branch: branch.to_string(),
        });
        self.check_failure(format!("git pull {} {}", remote_name, branch))
    }
}
