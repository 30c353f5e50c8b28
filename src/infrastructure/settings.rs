//! Global settings file (`global.json`)
//!
//! ```json
//! {
//!   "projects": ["src", "test"],
//!   "packages": "packages"
//! }
//! ```
//!
//! Only `packages` affects resolution. Unknown keys are ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::ports::FileSystem;
use crate::error::{ResolveError, ResolveResult};
use crate::infrastructure::fs::LocalFs;

/// File name looked up in the project directory and its ancestors
pub const GLOBAL_SETTINGS_FILE_NAME: &str = "global.json";

#[derive(Debug, Default, Deserialize)]
struct GlobalSettingsFile {
    #[serde(default)]
    projects: Vec<String>,
    #[serde(default)]
    packages: Option<String>,
}

/// Parsed `global.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalSettings {
    file_path: PathBuf,
    project_search_paths: Vec<String>,
    packages_path: Option<String>,
}

impl GlobalSettings {
    /// Parse settings from file content
    pub fn parse(file_path: impl Into<PathBuf>, content: &str) -> ResolveResult<Self> {
        let file_path = file_path.into();
        let raw: GlobalSettingsFile =
            serde_json::from_str(content).map_err(|e| ResolveError::InvalidSettings {
                path: file_path.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            file_path,
            project_search_paths: raw.projects,
            packages_path: raw.packages.filter(|p| !p.is_empty()),
        })
    }

    /// Load settings from a file
    pub fn load(file_path: &Path) -> ResolveResult<Self> {
        Self::load_with_fs(file_path, &LocalFs::new())
    }

    /// Load settings through a custom file system
    pub fn load_with_fs<F: FileSystem>(file_path: &Path, fs: &F) -> ResolveResult<Self> {
        let content = fs
            .read_to_string(file_path)
            .map_err(|e| ResolveError::Io(e.into_io()))?;
        Self::parse(file_path, &content)
    }

    /// Find the nearest settings file at or above `start` and load it
    pub fn find(start: &Path) -> ResolveResult<Option<Self>> {
        Self::find_with_fs(start, &LocalFs::new())
    }

    /// `find` through a custom file system
    pub fn find_with_fs<F: FileSystem>(start: &Path, fs: &F) -> ResolveResult<Option<Self>> {
        for dir in start.ancestors() {
            let candidate = dir.join(GLOBAL_SETTINGS_FILE_NAME);
            if fs.is_file(&candidate) {
                return Self::load_with_fs(&candidate, fs).map(Some);
            }
        }
        Ok(None)
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Directory containing the settings file (base for relative paths)
    pub fn directory(&self) -> &Path {
        self.file_path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Explicit package-store path, if set and non-empty
    pub fn packages_path(&self) -> Option<&str> {
        self.packages_path.as_deref()
    }

    pub fn project_search_paths(&self) -> &[String] {
        &self.project_search_paths
    }
}
