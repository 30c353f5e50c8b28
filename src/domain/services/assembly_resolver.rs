//! Assembly path resolver
//!
//! Flattens resolved packages into the load map the runtime consults:
//! assembly identity to absolute file path, with servicing replacements
//! applied.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::trace;

use crate::domain::entities::{LibraryDescription, LockFileItem, PackageDescription};
use crate::domain::ports::ServicingSource;
use crate::domain::value_objects::asset_path::{asset_file_stem, join_asset_path};
use crate::domain::value_objects::{is_placeholder_file, AssemblyIdentity};

/// Walks package assets and applies servicing replacements
#[derive(Debug, Clone)]
pub struct AssemblyPathResolver<S> {
    servicing: S,
}

impl<S: ServicingSource> AssemblyPathResolver<S> {
    pub fn new(servicing: S) -> Self {
        Self { servicing }
    }

    /// Visit every `(package, identity, path)` triple
    ///
    /// Order is library order, then runtime assets before resource assets,
    /// each in lock-file order. Non-package libraries and `_._`
    /// placeholder assets are skipped.
    pub fn visit<'a, I, F>(&self, libraries: I, mut on_resolve: F)
    where
        I: IntoIterator<Item = &'a LibraryDescription>,
        F: FnMut(&'a PackageDescription, AssemblyIdentity, PathBuf),
    {
        for package in libraries.into_iter().filter_map(LibraryDescription::as_package) {
            let target = package.target();

            for item in assemblies(target.runtime_assemblies()) {
                let identity = AssemblyIdentity::new(asset_file_stem(item.path()));
                let path = self.asset_path(package, item);
                on_resolve(package, identity, path);
            }

            for item in assemblies(target.resource_assemblies()) {
                let name = asset_file_stem(item.path());
                let identity = match item.locale() {
                    Some(locale) => AssemblyIdentity::with_culture(name, locale),
                    None => AssemblyIdentity::new(name),
                };
                let path = self.asset_path(package, item);
                on_resolve(package, identity, path);
            }
        }
    }

    /// Build the load map; a later visit replaces an earlier one for the
    /// same identity
    pub fn resolve<'a, I>(&self, libraries: I) -> HashMap<AssemblyIdentity, PathBuf>
    where
        I: IntoIterator<Item = &'a LibraryDescription>,
    {
        let mut assemblies = HashMap::new();
        self.visit(libraries, |_, identity, path| {
            assemblies.insert(identity, path);
        });
        assemblies
    }

    fn asset_path(&self, package: &PackageDescription, item: &LockFileItem) -> PathBuf {
        let library = package.library();
        match self
            .servicing
            .try_get_replacement(library.name(), library.version(), item.path())
        {
            Some(replacement) => {
                trace!(
                    package = %package.identity(),
                    asset = item.path(),
                    replacement = %replacement.display(),
                    "servicing replacement"
                );
                replacement
            }
            None => join_asset_path(package.path(), item.path()),
        }
    }
}

fn assemblies(items: &[LockFileItem]) -> impl Iterator<Item = &LockFileItem> {
    items.iter().filter(|item| !is_placeholder_file(item.path()))
}

/// Visit every resolved assembly of `libraries`; see [`AssemblyPathResolver::visit`]
pub fn visit_assembly_paths<'a, I, S, F>(libraries: I, servicing: S, on_resolve: F)
where
    I: IntoIterator<Item = &'a LibraryDescription>,
    S: ServicingSource,
    F: FnMut(&'a PackageDescription, AssemblyIdentity, PathBuf),
{
    AssemblyPathResolver::new(servicing).visit(libraries, on_resolve)
}

/// Load map of `libraries`; see [`AssemblyPathResolver::resolve`]
pub fn resolve_assembly_paths<'a, I, S>(
    libraries: I,
    servicing: S,
) -> HashMap<AssemblyIdentity, PathBuf>
where
    I: IntoIterator<Item = &'a LibraryDescription>,
    S: ServicingSource,
{
    AssemblyPathResolver::new(servicing).resolve(libraries)
}
