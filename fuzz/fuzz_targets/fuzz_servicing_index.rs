#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use pkgres::ServicingIndex;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz servicing index parsing - this should never panic
        let _ = ServicingIndex::parse(
            Path::new("/servicing"),
            Path::new("/servicing/index.txt"),
            content,
        );
    }
});
