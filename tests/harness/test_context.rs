//! Shared testing harness for `provisioner` integration tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_repository::seed_remote;

/// Behavior of the fake compose CLI and the database settings written for it.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeCompose {
    /// Exit 1 whenever the argument list contains this text.
    pub(crate) fail_on: Option<&'static str>,
    /// Number of leading `exec` calls that exit 1.
    pub(crate) exec_failures: u32,
    /// TOML array written as `database.health_check`; the built-in default when `None`.
    pub(crate) health_check: Option<&'static str>,
}

/// Isolated environment: two seeded remotes, a fake compose CLI and an empty work dir.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Environment whose compose CLI succeeds for every command.
    pub(crate) fn new() -> Self {
        Self::with_compose(FakeCompose::default())
    }

    /// Environment whose compose CLI exits 1 when its arguments contain `pattern`.
    pub(crate) fn with_compose_failure(pattern: &'static str) -> Self {
        Self::with_compose(FakeCompose { fail_on: Some(pattern), ..FakeCompose::default() })
    }

    pub(crate) fn with_compose(compose: FakeCompose) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let ctx = Self { root, work_dir };
        seed_remote(
            &ctx.frontend_remote(),
            &ctx.seed_dir("fe"),
            &[("package.json", "{\"name\":\"voting-system\"}\n")],
        );
        seed_remote(
            &ctx.backend_remote(),
            &ctx.seed_dir("be"),
            &[("package.json", "{\"name\":\"voting-server\"}\n")],
        );
        ctx.write_fake_compose(&compose);
        ctx.write_config(&compose);
        ctx
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn frontend_remote(&self) -> PathBuf {
        self.root.path().join("remotes/fe.git")
    }

    pub(crate) fn backend_remote(&self) -> PathBuf {
        self.root.path().join("remotes/be.git")
    }

    pub(crate) fn seed_dir(&self, name: &str) -> PathBuf {
        self.root.path().join("seeds").join(name)
    }

    fn compose_script(&self) -> PathBuf {
        self.root.path().join("bin/fake-compose")
    }

    fn compose_log(&self) -> PathBuf {
        self.root.path().join("compose.log")
    }

    /// Arguments of every compose invocation so far, one entry per call.
    pub(crate) fn compose_calls(&self) -> Vec<String> {
        match fs::read_to_string(self.compose_log()) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("provisioner").expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", relative, e))
    }

    pub(crate) fn write(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, content).expect("write file");
    }

    pub(crate) fn is_executable(&self, relative: &str) -> bool {
        let mode = fs::metadata(self.work_dir.join(relative)).expect("stat").permissions().mode();
        mode & 0o111 != 0
    }

    fn write_fake_compose(&self, compose: &FakeCompose) {
        let script = self.compose_script();
        fs::create_dir_all(script.parent().expect("bin dir")).expect("create bin dir");

        let fail_clause = match compose.fail_on {
            Some(pattern) => format!(
                "case \"$*\" in\n  *\"{pattern}\"*) echo \"fake compose failure\" >&2; exit 1 ;;\nesac\n"
            ),
            None => String::new(),
        };
        let content = format!(
            "#!/bin/sh\n\
             echo \"$*\" >> \"{log}\"\n\
             {fail_clause}\
             if [ \"$1\" = \"exec\" ]; then\n\
             n=$(cat \"{counter}\" 2>/dev/null || echo 0)\n\
             echo $((n + 1)) > \"{counter}\"\n\
             if [ \"$n\" -lt {exec_failures} ]; then echo \"not ready\" >&2; exit 1; fi\n\
             fi\n\
             if [ \"$1\" = \"ps\" ]; then echo db; fi\n\
             exit 0\n",
            log = self.compose_log().display(),
            counter = self.root.path().join("exec.count").display(),
            exec_failures = compose.exec_failures,
        );
        fs::write(&script, content).expect("write fake compose");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("chmod fake compose");
    }

    fn write_config(&self, compose: &FakeCompose) {
        let health_check = match compose.health_check {
            Some(array) => format!("health_check = {array}\n"),
            None => String::new(),
        };
        let config = format!(
            r#"[frontend]
remote = "{frontend}"

[backend]
remote = "{backend}"

[compose]
command = ["{compose}"]

[database]
max_attempts = 3
initial_backoff_ms = 1
max_backoff_ms = 2
{health_check}"#,
            frontend = self.frontend_remote().display(),
            backend = self.backend_remote().display(),
            compose = self.compose_script().display(),
        );
        self.write("provision.toml", &config);
    }
}
