//! Servicing table - immutable map of patched package assets
//!
//! Built once (programmatically or by `ServicingIndex`) and then only read.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::ServicingSource;
use crate::domain::value_objects::SemanticVersion;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ServicingKey {
    /// Uppercased package name
    name: String,
    version: SemanticVersion,
    /// Asset path with `/` separators
    path: String,
}

impl ServicingKey {
    fn new(name: &str, version: &SemanticVersion, relative_path: &str) -> Self {
        Self {
            name: name.to_uppercase(),
            version: version.clone(),
            path: relative_path.replace('\\', "/"),
        }
    }
}

/// Replacement paths keyed by package name, version and asset path
///
/// Package names match case-insensitively; asset paths match exactly once
/// separators are normalized.
#[derive(Debug, Clone, Default)]
pub struct ServicingTable {
    entries: HashMap<ServicingKey, PathBuf>,
}

impl ServicingTable {
    /// Table with no replacements
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> ServicingTableBuilder {
        ServicingTableBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replacement for an asset, if registered
    pub fn get(
        &self,
        package_name: &str,
        package_version: &SemanticVersion,
        relative_path: &str,
    ) -> Option<&Path> {
        self.entries
            .get(&ServicingKey::new(package_name, package_version, relative_path))
            .map(PathBuf::as_path)
    }
}

impl ServicingSource for ServicingTable {
    fn try_get_replacement(
        &self,
        package_name: &str,
        package_version: &SemanticVersion,
        relative_path: &str,
    ) -> Option<PathBuf> {
        self.get(package_name, package_version, relative_path)
            .map(Path::to_path_buf)
    }
}

/// Collects entries before the table is frozen
#[derive(Debug, Default)]
pub struct ServicingTableBuilder {
    entries: HashMap<ServicingKey, PathBuf>,
}

impl ServicingTableBuilder {
    /// Register a replacement; a later entry for the same key wins
    pub fn insert(
        &mut self,
        package_name: &str,
        package_version: &SemanticVersion,
        relative_path: &str,
        replacement: impl Into<PathBuf>,
    ) -> &mut Self {
        self.entries.insert(
            ServicingKey::new(package_name, package_version, relative_path),
            replacement.into(),
        );
        self
    }

    pub fn with_replacement(
        mut self,
        package_name: &str,
        package_version: &SemanticVersion,
        relative_path: &str,
        replacement: impl Into<PathBuf>,
    ) -> Self {
        self.insert(package_name, package_version, relative_path, replacement);
        self
    }

    pub fn build(self) -> ServicingTable {
        ServicingTable {
            entries: self.entries,
        }
    }
}
