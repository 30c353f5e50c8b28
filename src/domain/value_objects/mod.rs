//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod assembly_identity;
pub mod asset_path;
mod content_hash;
mod package_identity;
mod version;
mod version_range;

pub use assembly_identity::AssemblyIdentity;
pub use asset_path::{is_placeholder_file, PLACEHOLDER_FILE_NAME};
pub use content_hash::ContentHash;
pub use package_identity::PackageIdentity;
pub use version::SemanticVersion;
pub use version_range::VersionRange;
