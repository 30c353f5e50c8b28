//! Package path resolver
//!
//! On-disk layout of one package root (the primary store or a cache root):
//!
//! ```text
//! <root>/<name>/<version>/                          install path
//! <root>/<name>/<version>/<name>.<version>.nupkg.sha512   hash marker
//! ```
//!
//! `<version>` is the version text as written in the lock file, so
//! `1.0.0.0` and `1.0.0` are different folders.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::SemanticVersion;

/// Extension of the hash-marker file written next to an extracted package
pub const HASH_MARKER_EXTENSION: &str = "nupkg.sha512";

/// Maps package identities to directories under one root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePathResolver {
    root: PathBuf,
}

impl PackagePathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory the package is extracted into
    pub fn install_path(&self, name: &str, version: &SemanticVersion) -> PathBuf {
        self.root.join(name).join(version.original())
    }

    /// Hash marker proving the extracted package matches its archive
    pub fn hash_path(&self, name: &str, version: &SemanticVersion) -> PathBuf {
        self.install_path(name, version)
            .join(format!(
                "{}.{}.{}",
                name,
                version.original(),
                HASH_MARKER_EXTENSION
            ))
    }
}
