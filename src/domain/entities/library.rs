//! Library graph model
//!
//! Nodes and edges of the dependency graph that consumes package
//! descriptions. Only package nodes are built here; other node kinds come
//! from higher layers and are carried through as `ExternalLibrary`.

use std::fmt;
use std::path::{Path, PathBuf};

use super::package_description::PackageDescription;
use crate::domain::value_objects::VersionRange;

/// Kind of library a graph node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryType {
    /// Store-backed package from the lock file
    Package,
    /// Project in the same workspace
    Project,
    /// Plain assembly referenced by path
    ReferenceAssembly,
    /// Assembly provided by the host framework
    FrameworkOrGacAssembly,
    /// Nothing could satisfy the range
    Unresolved,
}

impl fmt::Display for LibraryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LibraryType::Package => "package",
            LibraryType::Project => "project",
            LibraryType::ReferenceAssembly => "reference-assembly",
            LibraryType::FrameworkOrGacAssembly => "framework-assembly",
            LibraryType::Unresolved => "unresolved",
        };
        f.write_str(name)
    }
}

/// Target of a dependency edge
///
/// Framework references never carry a version range; the constructors
/// are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryRange {
    name: String,
    version_range: Option<VersionRange>,
    is_framework_reference: bool,
}

impl LibraryRange {
    /// Edge resolved through the package store
    pub fn package(name: impl Into<String>, version_range: Option<VersionRange>) -> Self {
        Self {
            name: name.into(),
            version_range,
            is_framework_reference: false,
        }
    }

    /// Edge resolved through the host framework
    pub fn framework_reference(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version_range: None,
            is_framework_reference: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` means any version
    pub fn version_range(&self) -> Option<&VersionRange> {
        self.version_range.as_ref()
    }

    pub fn is_framework_reference(&self) -> bool {
        self.is_framework_reference
    }
}

impl fmt::Display for LibraryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_framework_reference {
            write!(f, "fx/{}", self.name)
        } else if let Some(range) = &self.version_range {
            write!(f, "{} {}", self.name, range)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// A dependency edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDependency {
    range: LibraryRange,
}

impl LibraryDependency {
    pub fn new(range: LibraryRange) -> Self {
        Self { range }
    }

    pub fn name(&self) -> &str {
        self.range.name()
    }

    pub fn range(&self) -> &LibraryRange {
        &self.range
    }
}

impl From<LibraryRange> for LibraryDependency {
    fn from(range: LibraryRange) -> Self {
        Self::new(range)
    }
}

/// A non-package graph node (project, plain reference, framework assembly)
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalLibrary {
    range: LibraryRange,
    library_type: LibraryType,
    path: Option<PathBuf>,
    resolved: bool,
    dependencies: Vec<LibraryDependency>,
}

impl ExternalLibrary {
    pub fn new(range: LibraryRange, library_type: LibraryType) -> Self {
        Self {
            range,
            library_type,
            path: None,
            resolved: library_type != LibraryType::Unresolved,
            dependencies: Vec::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<LibraryDependency>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn range(&self) -> &LibraryRange {
        &self.range
    }

    pub fn library_type(&self) -> LibraryType {
        self.library_type
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn dependencies(&self) -> &[LibraryDependency] {
        &self.dependencies
    }
}

/// A node of the flattened dependency graph
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryDescription {
    Package(PackageDescription),
    External(ExternalLibrary),
}

impl LibraryDescription {
    pub fn library_type(&self) -> LibraryType {
        match self {
            LibraryDescription::Package(_) => LibraryType::Package,
            LibraryDescription::External(lib) => lib.library_type(),
        }
    }

    pub fn range(&self) -> &LibraryRange {
        match self {
            LibraryDescription::Package(pkg) => pkg.range(),
            LibraryDescription::External(lib) => lib.range(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            LibraryDescription::Package(pkg) => Some(pkg.path()),
            LibraryDescription::External(lib) => lib.path(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        match self {
            LibraryDescription::Package(pkg) => pkg.is_resolved(),
            LibraryDescription::External(lib) => lib.is_resolved(),
        }
    }

    pub fn dependencies(&self) -> &[LibraryDependency] {
        match self {
            LibraryDescription::Package(pkg) => pkg.dependencies(),
            LibraryDescription::External(lib) => lib.dependencies(),
        }
    }

    pub fn as_package(&self) -> Option<&PackageDescription> {
        match self {
            LibraryDescription::Package(pkg) => Some(pkg),
            LibraryDescription::External(_) => None,
        }
    }
}

impl From<PackageDescription> for LibraryDescription {
    fn from(pkg: PackageDescription) -> Self {
        LibraryDescription::Package(pkg)
    }
}

impl From<ExternalLibrary> for LibraryDescription {
    fn from(lib: ExternalLibrary) -> Self {
        LibraryDescription::External(lib)
    }
}
