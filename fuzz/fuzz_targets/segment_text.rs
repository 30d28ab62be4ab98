#![no_main]

use libfuzzer_sys::fuzz_target;
use relnav_core::{AnalysisConfig, parse_changelog};

// The full segment+classify pipeline must never panic and must be
// deterministic on arbitrary input.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let config = AnalysisConfig::default();
        let first = parse_changelog(text, &config);
        let second = parse_changelog(text, &config);
        assert_eq!(first, second);
    }
});
