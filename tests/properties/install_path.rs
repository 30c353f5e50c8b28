//! Property tests for install-path selection across cache roots.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use pkgres::domain::ports::{FsError, FsResult};
use pkgres::domain::services::PackagePathResolver;
use pkgres::{ContentHash, FileSystem, PackageDependencyProvider, ResolverConfig, SemanticVersion};

/// Hash markers held in memory
#[derive(Debug, Default)]
struct MemoryFs {
    files: HashMap<PathBuf, String>,
}

impl FileSystem for MemoryFs {
    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

/// Marker state of one cache root
#[derive(Debug, Clone, Copy)]
enum Marker {
    Missing,
    Stale,
    Valid,
}

fn marker() -> impl Strategy<Value = Marker> {
    prop_oneof![Just(Marker::Missing), Just(Marker::Stale), Just(Marker::Valid)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The install path is the first cache root with a valid marker,
    /// or the primary store when no root has one.
    #[test]
    fn property_first_valid_cache_root_wins(
        markers in proptest::collection::vec(marker(), 0..=5),
    ) {
        let version = SemanticVersion::new(2, 1, 0);
        let roots: Vec<PathBuf> = (0..markers.len())
            .map(|i| PathBuf::from(format!("/cache-{i}")))
            .collect();

        let mut fs = MemoryFs::default();
        for (root, marker) in roots.iter().zip(&markers) {
            let hash_path = PackagePathResolver::new(root).hash_path("Pkg", &version);
            match marker {
                Marker::Missing => {}
                Marker::Stale => {
                    fs.files.insert(hash_path, "stale==".to_string());
                }
                Marker::Valid => {
                    fs.files.insert(hash_path, "pkg==".to_string());
                }
            }
        }

        let config = ResolverConfig::new("/store").with_cache_roots(roots.clone());
        let provider = PackageDependencyProvider::with_fs(&config, fs);
        let path = provider
            .resolve_install_path("Pkg", &version, &ContentHash::new("pkg=="))
            .unwrap();

        let expected_root = markers
            .iter()
            .position(|m| matches!(m, Marker::Valid))
            .map(|k| roots[k].clone())
            .unwrap_or_else(|| PathBuf::from("/store"));
        prop_assert_eq!(path, expected_root.join("Pkg").join("2.1.0"));
    }
}
