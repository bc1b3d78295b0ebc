//! Test double for `RepositoryFilesystemPort`.

use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystemPort;

use super::test_files::TestFiles;

/// In-memory implementation of `RepositoryFilesystemPort` for unit tests.
#[derive(Clone, Debug)]
pub struct MockRepositoryFs {
    files: TestFiles,
}

impl MockRepositoryFs {
    pub fn new(files: TestFiles) -> Self {
        Self { files }
    }
}

fn dir_prefix(path: &str) -> String {
    format!("{}/", path.trim_end_matches('/'))
}

impl RepositoryFilesystemPort for MockRepositoryFs {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.get(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        if path.split('/').any(|part| part == "..") {
            return Err(AppError::PathTraversal(path.to_string()));
        }
        self.files.add(path, content);
        Ok(())
    }

    fn set_executable(&self, path: &str) -> Result<(), AppError> {
        if !self.file_exists(path) {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Mock file not found",
            )));
        }
        self.files.executables.lock().unwrap().insert(path.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.files.lock().unwrap().contains_key(path)
    }

    fn is_dir(&self, path: &str) -> bool {
        let trimmed = path.trim_end_matches('/');
        let prefix = dir_prefix(trimmed);
        let seeded = self
            .files
            .dirs
            .lock()
            .unwrap()
            .iter()
            .any(|dir| dir == trimmed || dir.starts_with(&prefix));
        seeded || self.files.files.lock().unwrap().keys().any(|key| key.starts_with(&prefix))
    }

    fn is_missing_or_empty(&self, path: &str) -> Result<bool, AppError> {
        let prefix = dir_prefix(path);
        let has_file = self.files.files.lock().unwrap().keys().any(|key| key.starts_with(&prefix));
        let has_subdir = self.files.dirs.lock().unwrap().iter().any(|dir| dir.starts_with(&prefix));
        Ok(!has_file && !has_subdir)
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        PathBuf::from(path)
    }
}
