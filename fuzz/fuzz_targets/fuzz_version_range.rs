#![no_main]

use libfuzzer_sys::fuzz_target;
use pkgres::VersionRange;

fuzz_target!(|data: &[u8]| {
    if let Ok(spec) = std::str::from_utf8(data) {
        // Parsing must never panic; a parsed range must survive its own rendering
        if let Ok(range) = VersionRange::parse(spec) {
            let reparsed = VersionRange::parse(&range.to_string());
            assert!(reparsed.is_ok(), "rendered range failed to parse: {range}");
        }
    }
});
