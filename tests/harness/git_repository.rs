use std::fs;
use std::path::Path;

fn git(repo_dir: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn git {}: {}", args.join(" "), e));
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
}

pub(crate) fn configure_user(repo_dir: &Path) {
    git(repo_dir, &["config", "user.email", "test@example.com"]);
    git(repo_dir, &["config", "user.name", "Test User"]);
}

pub(crate) fn init_bare_repo(path: &Path) {
    fs::create_dir_all(path).expect("create bare repo dir");
    git(path, &["init", "--bare", "--initial-branch=main"]);
}

pub(crate) fn commit_all(repo_dir: &Path, message: &str) {
    git(repo_dir, &["add", "."]);
    git(repo_dir, &["commit", "-m", message]);
}

/// Create a bare repository at `remote` whose `main` holds the given files.
pub(crate) fn seed_remote(remote: &Path, seed_dir: &Path, files: &[(&str, &str)]) {
    init_bare_repo(remote);

    fs::create_dir_all(seed_dir).expect("create seed dir");
    git(seed_dir, &["init", "--initial-branch=main"]);
    configure_user(seed_dir);
    for (name, content) in files {
        fs::write(seed_dir.join(name), content).expect("write seed file");
    }
    commit_all(seed_dir, "initial");
    git(seed_dir, &["push", remote.to_str().expect("utf-8 remote path"), "main"]);
}

/// Add a commit to an existing seed checkout and push it to `remote`.
pub(crate) fn push_update(remote: &Path, seed_dir: &Path, name: &str, content: &str) {
    fs::write(seed_dir.join(name), content).expect("write update");
    commit_all(seed_dir, "update");
    git(seed_dir, &["push", remote.to_str().expect("utf-8 remote path"), "main"]);
}
