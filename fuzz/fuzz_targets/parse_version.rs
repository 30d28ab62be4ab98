#![no_main]

use libfuzzer_sys::fuzz_target;
use relnav_core::VersionId;

// Version parsing either round-trips through the canonical form or
// rejects the input; it never panics.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(version) = VersionId::parse(text) {
            let canonical = version.to_string();
            let reparsed = VersionId::parse(&canonical).expect("canonical form reparses");
            assert_eq!(version, reparsed);
        }
    }
});
