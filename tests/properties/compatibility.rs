//! Property tests for the compatibility verdict and placeholder detection.

use proptest::prelude::*;

use pkgres::domain::services::{contains_assembly, is_compatible};
use pkgres::{
    is_placeholder_file, LockFilePackageLibrary, LockFileTargetLibrary, PackageDependencyProvider,
    ResolverConfig, SemanticVersion,
};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_.]{1,12}").unwrap()
}

/// Relative asset path whose first segment is never `lib` or `ref`
fn non_binary_path() -> impl Strategy<Value = String> {
    (segment(), proptest::collection::vec(segment(), 0..=3))
        .prop_filter("binary folder", |(first, _)| first != "lib" && first != "ref")
        .prop_map(|(first, rest)| {
            std::iter::once(first)
                .chain(rest)
                .collect::<Vec<_>>()
                .join("/")
        })
}

fn binary_path() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("lib"), Just("ref")],
        proptest::collection::vec(segment(), 1..=3),
    )
        .prop_map(|(first, rest)| format!("{}/{}", first, rest.join("/")))
}

fn version() -> SemanticVersion {
    SemanticVersion::new(1, 0, 0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A package with no lib/ or ref/ files is compatible with any target.
    #[test]
    fn property_vacuous_compatibility(
        files in proptest::collection::vec(non_binary_path(), 0..=6),
    ) {
        let package = LockFilePackageLibrary::new("P", version()).with_files(files);
        let target = LockFileTargetLibrary::new("P", version());

        prop_assert!(!contains_assembly(&package));
        prop_assert!(is_compatible(&package, &target));
    }

    /// PROPERTY: Shipping binaries while the target selects none is incompatible,
    /// and the built description is unresolved as well.
    #[test]
    fn property_unselected_binaries_are_incompatible(
        binaries in proptest::collection::vec(binary_path(), 1..=4),
        others in proptest::collection::vec(non_binary_path(), 0..=4),
    ) {
        let files: Vec<String> = binaries.into_iter().chain(others).collect();
        let package = LockFilePackageLibrary::new("P", version()).with_files(files);
        let target = LockFileTargetLibrary::new("P", version());

        let provider = PackageDependencyProvider::new(&ResolverConfig::new("/packages"));
        let description = provider.build_description(package, target).unwrap();

        prop_assert!(!description.is_compatible());
        prop_assert!(!description.is_resolved());
    }

    /// PROPERTY: Any selected asset group makes the package compatible.
    #[test]
    fn property_selected_assets_are_compatible(
        binaries in proptest::collection::vec(binary_path(), 1..=4),
        group in 0usize..3,
        asset in binary_path(),
    ) {
        let package = LockFilePackageLibrary::new("P", version()).with_files(binaries);
        let target = LockFileTargetLibrary::new("P", version());
        let target = match group {
            0 => target.with_framework_assembly("System.Runtime"),
            1 => target.with_compile_time_assembly(asset.as_str()),
            _ => target.with_runtime_assembly(asset.as_str()),
        };

        prop_assert!(is_compatible(&package, &target));
    }

    /// PROPERTY: Only a file named exactly `_._` is a placeholder.
    #[test]
    fn property_placeholder_is_exact_file_name(
        dirs in proptest::collection::vec(segment(), 0..=3),
        name in proptest::string::string_regex("[_.a-z]{1,5}").unwrap(),
        backslash in any::<bool>(),
    ) {
        let sep = if backslash { "\\" } else { "/" };
        let path = dirs
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(name.as_str()))
            .collect::<Vec<_>>()
            .join(sep);

        prop_assert_eq!(is_placeholder_file(&path), name == "_._");
    }

    /// PROPERTY: Placeholder runtime items never become assembly names.
    #[test]
    fn property_placeholders_are_not_assemblies(
        names in proptest::collection::vec(
            prop_oneof![Just("_._".to_string()), proptest::string::string_regex("[A-Z][a-z]{0,6}").unwrap()],
            0..=6,
        ),
    ) {
        let mut target = LockFileTargetLibrary::new("P", version());
        for name in &names {
            let path = if name == "_._" {
                "lib/net45/_._".to_string()
            } else {
                format!("lib/net45/{name}.dll")
            };
            target = target.with_runtime_assembly(path.as_str());
        }
        let package = LockFilePackageLibrary::new("P", version());

        let provider = PackageDependencyProvider::new(&ResolverConfig::new("/packages"));
        let description = provider.build_description(package, target).unwrap();

        let expected: Vec<&String> = names.iter().filter(|n| *n != "_._").collect();
        prop_assert_eq!(description.assemblies().iter().collect::<Vec<_>>(), expected);
    }
}
