//! Test fixtures - lock-file records for common package shapes.

#![allow(dead_code)]

use pkgres::{
    LockFileItem, LockFilePackageLibrary, LockFileTargetLibrary, PackageDependency,
    SemanticVersion,
};

pub fn v(s: &str) -> SemanticVersion {
    SemanticVersion::parse(s).unwrap()
}

/// Package with one runtime assembly `lib/net45/<name>.dll`
pub fn runtime_package(
    name: &str,
    version: &str,
    hash: &str,
) -> (LockFilePackageLibrary, LockFileTargetLibrary) {
    let asset = format!("lib/net45/{name}.dll");
    let package = LockFilePackageLibrary::new(name, v(version))
        .with_sha512(hash)
        .with_files([asset.clone()]);
    let target = LockFileTargetLibrary::new(name, v(version))
        .with_compile_time_assembly(asset.as_str())
        .with_runtime_assembly(asset.as_str());
    (package, target)
}

/// Package that ships only `lib/<tfm>/_._` for other frameworks
pub fn placeholder_package(name: &str, version: &str) -> (LockFilePackageLibrary, LockFileTargetLibrary) {
    let package =
        LockFilePackageLibrary::new(name, v(version)).with_files(["lib/netcore50/_._"]);
    let target = LockFileTargetLibrary::new(name, v(version));
    (package, target)
}

/// Package with content files only
pub fn content_package(name: &str, version: &str) -> (LockFilePackageLibrary, LockFileTargetLibrary) {
    let package = LockFilePackageLibrary::new(name, v(version))
        .with_files(["content/readme.txt", "tools/init.ps1"]);
    let target = LockFileTargetLibrary::new(name, v(version));
    (package, target)
}

/// Runtime package with a French satellite assembly and a dependency
pub fn localized_package(
    name: &str,
    version: &str,
    depends_on: &str,
) -> (LockFilePackageLibrary, LockFileTargetLibrary) {
    let (package, target) = runtime_package(name, version, "");
    let target = target
        .with_resource_assembly(
            LockFileItem::new(format!("lib/net45/fr/{name}.resources.dll")).with_locale("fr"),
        )
        .with_dependency(PackageDependency::parse(depends_on, Some("1.0.0")).unwrap())
        .with_framework_assembly("System.Xml");
    (package, target)
}
