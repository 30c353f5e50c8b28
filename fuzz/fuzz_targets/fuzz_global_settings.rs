#![no_main]

use libfuzzer_sys::fuzz_target;
use pkgres::infrastructure::GlobalSettings;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz global.json parsing - this should never panic
        let _ = GlobalSettings::parse("/project/global.json", content);
    }
});
