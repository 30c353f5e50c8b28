//! Domain Entities
//!
//! - `LockFilePackageLibrary` / `LockFileTargetLibrary` - lock-file input records
//! - `PackageDescription` - per-package resolution output
//! - `LibraryDescription` - graph nodes handed to the assembly resolver
//! - `ServicingTable` - patched assets that replace store files

mod library;
mod lockfile;
mod package_description;
mod servicing_table;

pub use library::{
    ExternalLibrary, LibraryDependency, LibraryDescription, LibraryRange, LibraryType,
};
pub use lockfile::{LockFileItem, LockFilePackageLibrary, LockFileTargetLibrary, PackageDependency};
pub use package_description::PackageDescription;
pub use servicing_table::{ServicingTable, ServicingTableBuilder};
