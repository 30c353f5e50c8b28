//! Isolated on-disk package layout for tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use pkgres::domain::services::PackagePathResolver;
use pkgres::{AssemblyIdentity, MapEnvironment, SemanticVersion};
use tempfile::TempDir;

/// Temp directory holding a project, a package store and cache roots
///
/// Layout under `root`:
/// - `project/` - project directory (resolution starts here)
/// - `home/` - fake user home
/// - `packages/` - primary store when `global.json` points at it
/// - `cache-<n>/` - cache roots
pub struct TestStore {
    pub root: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let store = Self {
            root: TempDir::new().unwrap(),
        };
        std::fs::create_dir_all(store.project()).unwrap();
        std::fs::create_dir_all(store.home()).unwrap();
        store
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn project(&self) -> PathBuf {
        self.path("project")
    }

    pub fn home(&self) -> PathBuf {
        self.path("home")
    }

    /// Write `global.json` into the project directory
    pub fn with_global_json(self, content: &str) -> Self {
        std::fs::write(self.project().join("global.json"), content).unwrap();
        self
    }

    /// Write a hash marker for a package under `root`
    pub fn write_hash_marker(&self, root: &Path, name: &str, version: &str, hash: &str) {
        let version = SemanticVersion::parse(version).unwrap();
        let marker = PackagePathResolver::new(root).hash_path(name, &version);
        std::fs::create_dir_all(marker.parent().unwrap()).unwrap();
        std::fs::write(marker, hash).unwrap();
    }

    /// Environment with `HOME` pointing at the fake home and nothing else
    pub fn env(&self) -> MapEnvironment {
        MapEnvironment::new().with_var("HOME", self.home().to_string_lossy())
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a load map as sorted `identity => path` lines, paths relative
/// to `root` with `/` separators
pub fn render_load_map(map: &HashMap<AssemblyIdentity, PathBuf>, root: &Path) -> String {
    let mut lines: Vec<String> = map
        .iter()
        .map(|(identity, path)| {
            let relative = path.strip_prefix(root).unwrap_or(path);
            let segments: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            format!("{} => {}", identity, segments.join("/"))
        })
        .collect();
    lines.sort();
    lines.join("\n")
}
