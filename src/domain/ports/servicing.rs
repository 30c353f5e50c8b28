//! Servicing port - out-of-band replacement of package assets
//!
//! A servicing source maps `(package, version, relative asset path)` to a
//! patched file that must be loaded instead of the one in the package store.
//! Lookups are total: no mapping is not an error.

use std::path::PathBuf;

use crate::domain::value_objects::SemanticVersion;

/// Read-only lookup of servicing replacements
///
/// Implementations are populated once and never mutated afterwards, so
/// shared references can be read from many threads without locking.
pub trait ServicingSource {
    /// Replacement path for an asset, if one is registered
    fn try_get_replacement(
        &self,
        package_name: &str,
        package_version: &SemanticVersion,
        relative_path: &str,
    ) -> Option<PathBuf>;
}

/// Source with no replacements
#[derive(Debug, Clone, Copy, Default)]
pub struct NoServicing;

impl ServicingSource for NoServicing {
    fn try_get_replacement(&self, _: &str, _: &SemanticVersion, _: &str) -> Option<PathBuf> {
        None
    }
}

impl<S: ServicingSource + ?Sized> ServicingSource for &S {
    fn try_get_replacement(
        &self,
        package_name: &str,
        package_version: &SemanticVersion,
        relative_path: &str,
    ) -> Option<PathBuf> {
        (**self).try_get_replacement(package_name, package_version, relative_path)
    }
}

impl<S: ServicingSource + ?Sized> ServicingSource for std::sync::Arc<S> {
    fn try_get_replacement(
        &self,
        package_name: &str,
        package_version: &SemanticVersion,
        relative_path: &str,
    ) -> Option<PathBuf> {
        (**self).try_get_replacement(package_name, package_version, relative_path)
    }
}
