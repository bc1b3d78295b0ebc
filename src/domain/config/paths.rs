use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working root.
pub const CONFIG_FILE: &str = "provision.toml";

/// `<root>/provision.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
