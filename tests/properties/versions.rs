//! Property tests for version and version-range parsing.

use proptest::prelude::*;

use pkgres::{SemanticVersion, VersionRange};

fn version() -> impl Strategy<Value = SemanticVersion> {
    (0u64..20, 0u64..20, 0u64..20).prop_map(|(major, minor, patch)| {
        SemanticVersion::new(major, minor, patch)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Version parsing never panics on arbitrary input.
    #[test]
    fn property_version_parse_never_panics(input in "\\PC{0,24}") {
        let _ = SemanticVersion::parse(&input);
        let _ = VersionRange::parse(&input);
    }

    /// PROPERTY: An exact range is satisfied by its version and nothing else.
    #[test]
    fn property_exact_range_matches_one_version(a in version(), b in version()) {
        let range = VersionRange::exact(a.clone());
        prop_assert!(range.is_exact());
        prop_assert!(range.satisfies(&a));
        prop_assert_eq!(range.satisfies(&b), a == b);
    }

    /// PROPERTY: A rendered range parses back to an equivalent range.
    #[test]
    fn property_range_display_reparses(
        lo in version(),
        hi in version(),
        min_inclusive in any::<bool>(),
        max_inclusive in any::<bool>(),
        candidate in version(),
    ) {
        prop_assume!(lo < hi);
        let spec = format!(
            "{}{}, {}{}",
            if min_inclusive { "[" } else { "(" },
            lo,
            hi,
            if max_inclusive { "]" } else { ")" },
        );
        let range = VersionRange::parse(&spec).unwrap();
        let reparsed = VersionRange::parse(&range.to_string()).unwrap();

        prop_assert_eq!(&range, &reparsed);
        prop_assert_eq!(range.satisfies(&candidate), reparsed.satisfies(&candidate));
    }
}
