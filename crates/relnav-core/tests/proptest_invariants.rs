//! Property tests for the merge and range-filter invariants.

use proptest::prelude::*;

use relnav_core::merge::merge;
use relnav_core::model::VersionRecord;
use relnav_core::parse::parse_changelog;
use relnav_core::range::filter_range;
use relnav_core::version::VersionId;
use relnav_core::{AnalysisConfig, MinBlockSize};

fn version_strategy() -> impl Strategy<Value = VersionId> {
    (0u32..4, 0u32..30, 0u32..5).prop_map(|(major, minor, patch)| {
        VersionId::new(major, minor, patch)
    })
}

fn record(version: VersionId, tag: &str) -> VersionRecord {
    VersionRecord {
        version,
        changes: Vec::new(),
        raw_text: tag.to_string(),
    }
}

proptest! {
    /// `filter` output is always ascending, and either every record is
    /// in bounds or the fallback is flagged and capped.
    #[test]
    fn filter_is_ascending_and_bounded(
        versions in prop::collection::vec(version_strategy(), 0..40),
        start in version_strategy(),
        end in version_strategy(),
        cap in 1usize..20,
    ) {
        let records = versions.into_iter().map(|v| record(v, "r")).collect();
        let selection = filter_range(records, start, end, cap);

        for pair in selection.records.windows(2) {
            prop_assert!(pair[0].version <= pair[1].version);
        }
        if selection.fallback {
            prop_assert!(selection.records.len() <= cap);
        } else {
            prop_assert!(!selection.records.is_empty());
            for r in &selection.records {
                prop_assert!(start <= r.version && r.version <= end);
            }
        }
    }

    /// For every version id present in both inputs, `merge([a, b])`
    /// keeps `a`'s record.
    #[test]
    fn merge_prefers_the_earlier_source(
        a_versions in prop::collection::vec(version_strategy(), 0..15),
        b_versions in prop::collection::vec(version_strategy(), 0..15),
    ) {
        let a: Vec<VersionRecord> =
            a_versions.iter().map(|v| record(*v, "a")).collect();
        let b: Vec<VersionRecord> =
            b_versions.iter().map(|v| record(*v, "b")).collect();

        let merged = merge([a, b]);

        // Unique output ids.
        let mut seen = std::collections::HashSet::new();
        for r in &merged {
            prop_assert!(seen.insert(r.version));
        }

        for r in &merged {
            if a_versions.contains(&r.version) {
                prop_assert_eq!(&r.raw_text, "a");
            } else {
                prop_assert_eq!(&r.raw_text, "b");
            }
        }
    }

    /// Segmenting and classifying the same text twice yields identical
    /// records, whatever the text looks like.
    #[test]
    fn parse_is_idempotent(
        lines in prop::collection::vec("[ -~]{0,60}", 0..60),
    ) {
        let text = lines.join("\n");
        let config = AnalysisConfig {
            min_block: MinBlockSize::Chars(10),
            ..AnalysisConfig::default()
        };
        let first = parse_changelog(&text, &config);
        let second = parse_changelog(&text, &config);
        prop_assert_eq!(first, second);
    }
}
