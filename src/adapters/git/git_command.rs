use crate::domain::AppError;
use crate::ports::GitPort;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// `GitPort` backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn run_output(&self, args: &[&str], cwd: Option<&Path>) -> Result<Output, AppError> {
        let rendered = format!("git {}", args.join(" "));
        tracing::debug!(command = %rendered, "running git");

        let mut command = Command::new("git");
        command.args(args);
        command.current_dir(cwd.unwrap_or(&self.root));
        // Never block on a credential prompt; fail like any other git error.
        command.env("GIT_TERMINAL_PROMPT", "0");

        let output = command
            .output()
            .map_err(|e| AppError::GitError { command: rendered.clone(), details: e.to_string() })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError {
                command: rendered,
                details: if stderr.is_empty() { output.status.to_string() } else { stderr },
            });
        }

        Ok(output)
    }
}

impl GitPort for GitCommandAdapter {
    fn clone_repository(&self, remote: &str, destination: &Path) -> Result<(), AppError> {
        let destination = destination.to_str().ok_or_else(|| {
            AppError::config_error(format!(
                "Clone destination is not valid UTF-8: {}",
                destination.display()
            ))
        })?;
        self.run_output(&["clone", remote, destination], None)?;
        Ok(())
    }

    fn pull(&self, repository: &Path, remote_name: &str, branch: &str) -> Result<(), AppError> {
        self.run_output(&["pull", remote_name, branch], Some(repository))?;
        Ok(())
    }
}
