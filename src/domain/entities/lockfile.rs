//! Lock-file records
//!
//! The parsed shape of a resolved lock file, as far as dependency
//! descriptions need it. Parsing itself lives outside this crate; these are
//! pure data structures that a parser fills in through the `with_*` builders.

use std::collections::BTreeMap;

use crate::domain::value_objects::{ContentHash, PackageIdentity, SemanticVersion, VersionRange};
use crate::error::ResolveResult;

/// An asset entry of a target library (compile, runtime or resource item)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockFileItem {
    /// Package-relative path (`lib/net45/Foo.dll`)
    path: String,
    /// Item metadata, e.g. `locale` for resource assemblies
    properties: BTreeMap<String, String>,
}

impl LockFileItem {
    /// Property carrying the culture of a resource assembly
    pub const LOCALE_PROPERTY: &'static str = "locale";

    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Shorthand for a resource item with a `locale` property
    pub fn with_locale(self, locale: impl Into<String>) -> Self {
        self.with_property(Self::LOCALE_PROPERTY, locale)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn locale(&self) -> Option<&str> {
        self.property(Self::LOCALE_PROPERTY)
    }
}

impl From<&str> for LockFileItem {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// A dependency declared by a target library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDependency {
    name: String,
    version_range: Option<VersionRange>,
}

impl PackageDependency {
    pub fn new(name: impl Into<String>, version_range: Option<VersionRange>) -> Self {
        Self {
            name: name.into(),
            version_range,
        }
    }

    /// Build from the raw spec string as written in the lock file
    pub fn parse(name: impl Into<String>, version_spec: Option<&str>) -> ResolveResult<Self> {
        let version_range = version_spec.map(VersionRange::parse).transpose()?;
        Ok(Self::new(name, version_range))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version_range(&self) -> Option<&VersionRange> {
        self.version_range.as_ref()
    }
}

/// A package entry of the lock file's `libraries` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockFilePackageLibrary {
    name: String,
    version: SemanticVersion,
    /// Expected archive hash (compared against cache hash markers)
    sha512: ContentHash,
    /// Every file in the package archive, package-relative
    files: Vec<String>,
}

impl LockFilePackageLibrary {
    pub fn new(name: impl Into<String>, version: SemanticVersion) -> Self {
        Self {
            name: name.into(),
            version,
            sha512: ContentHash::default(),
            files: Vec::new(),
        }
    }

    pub fn with_sha512(mut self, sha512: impl Into<ContentHash>) -> Self {
        self.sha512 = sha512.into();
        self
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &SemanticVersion {
        &self.version
    }

    pub fn identity(&self) -> PackageIdentity {
        PackageIdentity::new(self.name.clone(), self.version.clone())
    }

    pub fn sha512(&self) -> &ContentHash {
        &self.sha512
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }
}

/// A package entry of one target framework section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockFileTargetLibrary {
    name: String,
    version: SemanticVersion,
    dependencies: Vec<PackageDependency>,
    framework_assemblies: Vec<String>,
    compile_time_assemblies: Vec<LockFileItem>,
    runtime_assemblies: Vec<LockFileItem>,
    resource_assemblies: Vec<LockFileItem>,
}

impl LockFileTargetLibrary {
    pub fn new(name: impl Into<String>, version: SemanticVersion) -> Self {
        Self {
            name: name.into(),
            version,
            dependencies: Vec::new(),
            framework_assemblies: Vec::new(),
            compile_time_assemblies: Vec::new(),
            runtime_assemblies: Vec::new(),
            resource_assemblies: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, dependency: PackageDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn with_framework_assembly(mut self, name: impl Into<String>) -> Self {
        self.framework_assemblies.push(name.into());
        self
    }

    pub fn with_compile_time_assembly(mut self, item: impl Into<LockFileItem>) -> Self {
        self.compile_time_assemblies.push(item.into());
        self
    }

    pub fn with_runtime_assembly(mut self, item: impl Into<LockFileItem>) -> Self {
        self.runtime_assemblies.push(item.into());
        self
    }

    pub fn with_resource_assembly(mut self, item: impl Into<LockFileItem>) -> Self {
        self.resource_assemblies.push(item.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &SemanticVersion {
        &self.version
    }

    pub fn identity(&self) -> PackageIdentity {
        PackageIdentity::new(self.name.clone(), self.version.clone())
    }

    pub fn dependencies(&self) -> &[PackageDependency] {
        &self.dependencies
    }

    pub fn framework_assemblies(&self) -> &[String] {
        &self.framework_assemblies
    }

    pub fn compile_time_assemblies(&self) -> &[LockFileItem] {
        &self.compile_time_assemblies
    }

    pub fn runtime_assemblies(&self) -> &[LockFileItem] {
        &self.runtime_assemblies
    }

    pub fn resource_assemblies(&self) -> &[LockFileItem] {
        &self.resource_assemblies
    }
}
