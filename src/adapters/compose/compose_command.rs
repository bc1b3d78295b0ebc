use crate::domain::AppError;
use crate::ports::OrchestratorPort;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// `OrchestratorPort` backed by a compose CLI (`docker-compose` or `docker compose`).
#[derive(Debug, Clone)]
pub struct ComposeCommandAdapter {
    root: PathBuf,
    program: String,
    base_args: Vec<String>,
}

impl ComposeCommandAdapter {
    /// Build an adapter from an argv prefix such as `["docker", "compose"]`.
    pub fn new(root: PathBuf, command: &[String]) -> Result<Self, AppError> {
        let (program, base_args) = command
            .split_first()
            .ok_or_else(|| AppError::config_error("compose.command must name a program"))?;
        Ok(Self { root, program: program.clone(), base_args: base_args.to_vec() })
    }

    fn command(&self, args: &[&str]) -> (Command, String) {
        let mut rendered = Vec::with_capacity(1 + self.base_args.len() + args.len());
        rendered.push(self.program.as_str());
        rendered.extend(self.base_args.iter().map(String::as_str));
        rendered.extend_from_slice(args);
        let rendered = rendered.join(" ");

        let mut command = Command::new(&self.program);
        command.args(&self.base_args).args(args).current_dir(&self.root);
        (command, rendered)
    }

    /// Run with inherited stdout/stderr so build output streams to the terminal.
    fn run_streaming(&self, args: &[&str]) -> Result<(), AppError> {
        let (mut command, rendered) = self.command(args);
        tracing::debug!(command = %rendered, "running orchestrator");

        let status = command
            .stdin(Stdio::null())
            .status()
            .map_err(|e| AppError::CommandFailed { command: rendered.clone(), details: e.to_string() })?;

        if !status.success() {
            return Err(AppError::CommandFailed { command: rendered, details: status.to_string() });
        }
        Ok(())
    }

    /// Run quietly; returns whether the command succeeded and its trimmed stdout.
    fn run_probe(&self, args: &[&str]) -> Result<(bool, String), AppError> {
        let (mut command, rendered) = self.command(args);
        tracing::trace!(command = %rendered, "probing orchestrator");

        let output = command
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AppError::CommandFailed { command: rendered, details: e.to_string() })?;

        Ok((output.status.success(), String::from_utf8_lossy(&output.stdout).trim().to_string()))
    }
}

impl OrchestratorPort for ComposeCommandAdapter {
    fn down(&self) -> Result<(), AppError> {
        self.run_streaming(&["down"])
    }

    fn up_build_detached(&self) -> Result<(), AppError> {
        self.run_streaming(&["up", "-d", "--build"])
    }

    fn up_service(&self, service: &str) -> Result<(), AppError> {
        self.run_streaming(&["up", "-d", service])
    }

    fn is_service_ready(&self, service: &str, health_check: &[String]) -> Result<bool, AppError> {
        if health_check.is_empty() {
            // `--services --filter` is understood by both Compose v1 and v2.
            let (ok, stdout) =
                self.run_probe(&["ps", "--services", "--filter", "status=running"])?;
            return Ok(ok && stdout.lines().any(|line| line.trim() == service));
        }

        let mut args = vec!["exec", "-T", service];
        args.extend(health_check.iter().map(String::as_str));
        let (ok, _) = self.run_probe(&args)?;
        Ok(ok)
    }
}
