//! Domain Services
//!
//! Resolution logic over domain entities. File access goes through the
//! `FileSystem` port and servicing lookups through `ServicingSource`.

mod assembly_resolver;
mod dependency_provider;
mod package_path_resolver;

pub use assembly_resolver::{resolve_assembly_paths, visit_assembly_paths, AssemblyPathResolver};
pub use dependency_provider::{contains_assembly, is_compatible, PackageDependencyProvider};
pub use package_path_resolver::{PackagePathResolver, HASH_MARKER_EXTENSION};
