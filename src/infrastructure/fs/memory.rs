//! In-memory file system for unit tests

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Clone)]
enum Entry {
    File(String),
    /// Exists but reading it fails with permission denied
    Unreadable,
    /// Behind a directory that cannot be traversed: `is_file` reports
    /// false the way `Path::is_file` does on EACCES, reads fail
    Untraversable,
}

/// Files held in a map, keyed by exact path
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: HashMap<PathBuf, Entry>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .insert(path.into(), Entry::File(content.to_string()));
        self
    }

    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into(), Entry::Unreadable);
        self
    }

    pub fn with_untraversable(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into(), Entry::Untraversable);
        self
    }
}

impl FileSystem for MemoryFs {
    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        match self.files.get(path) {
            Some(Entry::File(content)) => Ok(content.clone()),
            Some(Entry::Unreadable | Entry::Untraversable) => {
                Err(FsError::PermissionDenied(path.to_path_buf()))
            }
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(
            self.files.get(path),
            Some(Entry::File(_) | Entry::Unreadable)
        )
    }
}
