//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sharpgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SharpgenResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (testing helper).
    pub fn seed(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .write()
            .expect("memory filesystem lock")
            .insert(path.into(), content.into());
    }

    /// List all file paths.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.files
            .read()
            .expect("memory filesystem lock")
            .keys()
            .cloned()
            .collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_file(&self, path: &Path) -> SharpgenResult<String> {
        let files = self.files.read().map_err(|_| lock_error(path))?;
        files.get(path).cloned().ok_or_else(|| {
            ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "no such file".to_string(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> SharpgenResult<()> {
        let mut files = self.files.write().map_err(|_| lock_error(path))?;
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }
}

fn lock_error(path: &Path) -> sharpgen_core::error::SharpgenError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_content() {
        let fs = MemoryFilesystem::new();
        let path = Path::new("/project/File.cs");

        assert!(!fs.exists(path));
        fs.write_file(path, "content").unwrap();
        assert!(fs.exists(path));
        assert_eq!(fs.read_file(path).unwrap(), "content");
    }
}
