//! Scenario: Operations ships a patched assembly through servicing
//!
//! Journey: A security fix for one assembly is dropped into a servicing
//! folder; the load map must pick the patched file without a re-restore.
//!
//! Steps:
//! 1. `DNX_SERVICING` points at a folder with `index.txt`
//! 2. The index replaces `lib/net45/Foo.dll` of `Foo 1.0.0`
//! 3. The load map is built for `Foo` and an unpatched `Loc`
//!
//! Success Criteria:
//! - The patched assembly path comes from the servicing folder
//! - Unpatched assemblies keep their store paths

use pkgres::{
    resolve_assembly_paths, AssemblyIdentity, LibraryDescription, PackageDependencyProvider,
    ResolverConfig, ServicingIndex,
};

use crate::common::*;

/// SCENARIO: Servicing index replaces one assembly in the load map
#[test]
fn scenario_servicing_replaces_assembly() {
    let store = TestStore::new();
    let servicing_dir = store.path("servicing");
    std::fs::create_dir_all(&servicing_dir).unwrap();
    std::fs::write(
        servicing_dir.join("index.txt"),
        "# security fixes\nnupkg|foo|1.0|lib\\net45\\Foo.dll=patched/Foo.dll\n",
    )
    .unwrap();

    let env = store
        .env()
        .with_var("DNX_SERVICING", servicing_dir.to_string_lossy());
    let servicing = ServicingIndex::from_environment(&env).unwrap();
    assert_eq!(servicing.len(), 1);

    let store_root = store.path("packages");
    let provider = PackageDependencyProvider::new(&ResolverConfig::new(&store_root));
    let libraries: Vec<LibraryDescription> = [
        runtime_package("Foo", "1.0.0", "foo=="),
        localized_package("Loc", "2.0.0", "Foo"),
    ]
    .into_iter()
    .map(|(package, target)| {
        LibraryDescription::from(provider.build_description(package, target).unwrap())
    })
    .collect();

    let load_map = resolve_assembly_paths(&libraries, &servicing);

    assert_eq!(
        load_map[&AssemblyIdentity::new("Foo")],
        servicing_dir.join("patched").join("Foo.dll")
    );
    assert_eq!(
        load_map[&AssemblyIdentity::new("loc")],
        store_root
            .join("Loc")
            .join("2.0.0")
            .join("lib")
            .join("net45")
            .join("Loc.dll")
    );
}

/// SCENARIO: Missing servicing folder means no replacements
#[test]
fn scenario_missing_servicing_index_is_empty() {
    let store = TestStore::new();
    let env = store
        .env()
        .with_var("DNX_SERVICING", store.path("nowhere").to_string_lossy());

    let servicing = ServicingIndex::from_environment(&env).unwrap();
    assert!(servicing.is_empty());
}
