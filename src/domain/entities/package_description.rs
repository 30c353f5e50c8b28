//! Package description - the per-package output of dependency resolution

use std::path::{Path, PathBuf};

use super::library::{LibraryDependency, LibraryRange};
use super::lockfile::{LockFilePackageLibrary, LockFileTargetLibrary};
use crate::domain::value_objects::PackageIdentity;

/// Fully materialized dependency description of one package
///
/// Built by `PackageDependencyProvider::build_description` with every field
/// populated. The only later change allowed is `mark_unresolved`.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDescription {
    /// Exact-version range naming this package
    range: LibraryRange,
    library: LockFilePackageLibrary,
    target: LockFileTargetLibrary,
    dependencies: Vec<LibraryDependency>,
    resolved: bool,
    compatible: bool,
    /// Install root the package's assets are read from
    path: PathBuf,
    /// Runtime assembly simple names, lock-file order, duplicates kept
    assemblies: Vec<String>,
}

impl PackageDescription {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        range: LibraryRange,
        library: LockFilePackageLibrary,
        target: LockFileTargetLibrary,
        dependencies: Vec<LibraryDependency>,
        resolved: bool,
        compatible: bool,
        path: PathBuf,
        assemblies: Vec<String>,
    ) -> Self {
        Self {
            range,
            library,
            target,
            dependencies,
            resolved,
            compatible,
            path,
            assemblies,
        }
    }

    pub fn identity(&self) -> PackageIdentity {
        self.library.identity()
    }

    pub fn name(&self) -> &str {
        self.library.name()
    }

    pub fn range(&self) -> &LibraryRange {
        &self.range
    }

    pub fn library(&self) -> &LockFilePackageLibrary {
        &self.library
    }

    pub fn target(&self) -> &LockFileTargetLibrary {
        &self.target
    }

    pub fn dependencies(&self) -> &[LibraryDependency] {
        &self.dependencies
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn is_compatible(&self) -> bool {
        self.compatible
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn assemblies(&self) -> &[String] {
        &self.assemblies
    }

    /// Downgrade to unresolved (e.g. the install root is missing on disk)
    ///
    /// Never upgrades back to resolved.
    pub fn mark_unresolved(&mut self) {
        self.resolved = false;
    }
}
