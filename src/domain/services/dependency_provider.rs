//! Package dependency provider
//!
//! Turns one package's lock-file records into a `PackageDescription`:
//! compatibility verdict, dependency edges, install root and runtime
//! assembly names.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ResolverConfig;
use crate::domain::entities::{
    LibraryDependency, LibraryRange, LockFilePackageLibrary, LockFileTargetLibrary,
    PackageDescription,
};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::asset_path::{asset_file_stem, starts_with_directory};
use crate::domain::value_objects::{is_placeholder_file, ContentHash, SemanticVersion, VersionRange};
use crate::error::{ResolveError, ResolveResult};
use crate::infrastructure::fs::LocalFs;

use super::package_path_resolver::PackagePathResolver;

/// Top-level package folders that hold binaries
const ASSEMBLY_DIRECTORIES: [&str; 2] = ["ref", "lib"];

/// Builds package descriptions against a package store and its cache roots
///
/// Holds no mutable state; one provider can serve concurrent
/// `build_description` calls when `F` is `Sync`.
#[derive(Debug, Clone)]
pub struct PackageDependencyProvider<F: FileSystem = LocalFs> {
    cache_resolvers: Vec<PackagePathResolver>,
    package_path_resolver: PackagePathResolver,
    fs: F,
}

impl PackageDependencyProvider<LocalFs> {
    pub fn new(config: &ResolverConfig) -> Self {
        Self::with_fs(config, LocalFs::new())
    }
}

impl<F: FileSystem> PackageDependencyProvider<F> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(config: &ResolverConfig, fs: F) -> Self {
        Self {
            cache_resolvers: config
                .cache_roots()
                .iter()
                .map(PackagePathResolver::new)
                .collect(),
            package_path_resolver: PackagePathResolver::new(config.packages_path()),
            fs,
        }
    }

    /// Primary package-store root
    pub fn packages_path(&self) -> &Path {
        self.package_path_resolver.root()
    }

    /// Build the full description of one package for the active target
    ///
    /// `package` and `target` must describe the same package. A package
    /// without usable binaries comes back incompatible, not as an error.
    pub fn build_description(
        &self,
        package: LockFilePackageLibrary,
        target: LockFileTargetLibrary,
    ) -> ResolveResult<PackageDescription> {
        if package.name() != target.name() || package.version() != target.version() {
            return Err(ResolveError::IdentityMismatch {
                package: package.identity().to_string(),
                target: target.identity().to_string(),
            });
        }

        let compatible = is_compatible(&package, &target);
        // nothing at this layer can make a compatible package unresolved
        let resolved = compatible;
        if !compatible {
            debug!(
                package = %package.identity(),
                "package ships binaries but none match the target"
            );
        }

        let dependencies = build_dependencies(&target);
        let range = LibraryRange::package(
            package.name(),
            Some(VersionRange::exact(package.version().clone())),
        );

        let path = self.resolve_install_path(package.name(), package.version(), package.sha512())?;
        let assemblies = runtime_assembly_names(&target);

        Ok(PackageDescription::new(
            range,
            package,
            target,
            dependencies,
            resolved,
            compatible,
            path,
            assemblies,
        ))
    }

    /// Install root for a package: the first cache root whose hash marker
    /// matches `expected_hash`, else the primary store
    pub fn resolve_install_path(
        &self,
        name: &str,
        version: &SemanticVersion,
        expected_hash: &ContentHash,
    ) -> ResolveResult<PathBuf> {
        for resolver in &self.cache_resolvers {
            let hash_path = resolver.hash_path(name, version);
            // no is_file pre-check: it reports false when a parent is untraversable
            let marker = match self.fs.read_to_string(&hash_path) {
                Ok(marker) => marker,
                Err(e) if e.is_not_found() => continue,
                Err(e) => {
                    return Err(ResolveError::HashMarkerRead {
                        path: hash_path,
                        source: e.into_io(),
                    })
                }
            };

            if expected_hash.matches_str(&marker) {
                let install_path = resolver.install_path(name, version);
                debug!(
                    package = name,
                    %version,
                    path = %install_path.display(),
                    "resolved package from cache root"
                );
                return Ok(install_path);
            }

            debug!(
                package = name,
                %version,
                marker = %hash_path.display(),
                "cache hash marker does not match lock file"
            );
        }

        let install_path = self.package_path_resolver.install_path(name, version);
        debug!(
            package = name,
            %version,
            path = %install_path.display(),
            "resolved package from package store"
        );
        Ok(install_path)
    }
}

/// True if the package ships any `lib/` or `ref/` file
pub fn contains_assembly(package: &LockFilePackageLibrary) -> bool {
    package.files().iter().any(|file| {
        ASSEMBLY_DIRECTORIES
            .iter()
            .any(|dir| starts_with_directory(file, dir))
    })
}

/// A package is compatible when the target selected some assemblies, or
/// when the package has no binaries to select from at all
pub fn is_compatible(package: &LockFilePackageLibrary, target: &LockFileTargetLibrary) -> bool {
    !target.framework_assemblies().is_empty()
        || !target.compile_time_assemblies().is_empty()
        || !target.runtime_assemblies().is_empty()
        || !contains_assembly(package)
}

/// Package dependencies first, then framework references, each in lock-file order
fn build_dependencies(target: &LockFileTargetLibrary) -> Vec<LibraryDependency> {
    let mut dependencies =
        Vec::with_capacity(target.dependencies().len() + target.framework_assemblies().len());

    dependencies.extend(target.dependencies().iter().map(|dep| {
        LibraryDependency::new(LibraryRange::package(
            dep.name(),
            dep.version_range().cloned(),
        ))
    }));

    dependencies.extend(
        target
            .framework_assemblies()
            .iter()
            .map(|name| LibraryDependency::new(LibraryRange::framework_reference(name.as_str()))),
    );

    dependencies
}

fn runtime_assembly_names(target: &LockFileTargetLibrary) -> Vec<String> {
    target
        .runtime_assemblies()
        .iter()
        .map(|item| item.path())
        .filter(|path| !is_placeholder_file(path))
        .map(|path| asset_file_stem(path).to_string())
        .collect()
}
