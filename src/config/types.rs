//! Configuration types

use std::path::{Path, PathBuf};

/// Where packages are looked up on disk
///
/// `cache_roots` are checked in order before `packages_path`; a cache root
/// only wins when its hash marker matches the lock file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    packages_path: PathBuf,
    cache_roots: Vec<PathBuf>,
}

impl ResolverConfig {
    /// Config with a primary store root and no cache roots
    pub fn new(packages_path: impl Into<PathBuf>) -> Self {
        Self {
            packages_path: packages_path.into(),
            cache_roots: Vec::new(),
        }
    }

    /// Replace the cache roots
    pub fn with_cache_roots(mut self, cache_roots: Vec<PathBuf>) -> Self {
        self.cache_roots = cache_roots;
        self
    }

    /// Append one cache root (checked after those already present)
    pub fn with_cache_root(mut self, cache_root: impl Into<PathBuf>) -> Self {
        self.cache_roots.push(cache_root.into());
        self
    }

    pub fn packages_path(&self) -> &Path {
        &self.packages_path
    }

    pub fn cache_roots(&self) -> &[PathBuf] {
        &self.cache_roots
    }
}
