//! pkgres - package dependency resolution for a managed-code runtime
//!
//! Turns lock-file records into package descriptions, picks each package's
//! install root (hash-verified cache roots before the package store), and
//! flattens the resolved set into an assembly load map with servicing
//! replacements applied.
//!
//! ```no_run
//! use pkgres::{
//!     config, resolve_assembly_paths, LibraryDescription, PackageDependencyProvider,
//!     ProcessEnvironment, ServicingIndex,
//! };
//!
//! # fn main() -> pkgres::ResolveResult<()> {
//! let env = ProcessEnvironment;
//! let config = config::load(std::path::Path::new("."), &env)?;
//! let provider = PackageDependencyProvider::new(&config);
//! let servicing = ServicingIndex::from_environment(&env)?;
//!
//! let libraries: Vec<LibraryDescription> = Vec::new();
//! let load_map = resolve_assembly_paths(&libraries, &servicing);
//! # let _ = (provider, load_map);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::{resolve_repository_root, ResolverConfig};
pub use domain::entities::{
    ExternalLibrary, LibraryDependency, LibraryDescription, LibraryRange, LibraryType,
    LockFileItem, LockFilePackageLibrary, LockFileTargetLibrary, PackageDependency,
    PackageDescription, ServicingTable,
};
pub use domain::ports::{Environment, FileSystem, MapEnvironment, NoServicing, ServicingSource};
pub use domain::services::{
    resolve_assembly_paths, visit_assembly_paths, AssemblyPathResolver, PackageDependencyProvider,
};
pub use domain::value_objects::{
    is_placeholder_file, AssemblyIdentity, ContentHash, PackageIdentity, SemanticVersion,
    VersionRange,
};
pub use error::{ResolveError, ResolveResult};
pub use infrastructure::{LocalFs, ProcessEnvironment, ServicingIndex};
