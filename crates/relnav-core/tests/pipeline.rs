//! End-to-end pipeline tests over realistic changelog text:
//! segment → classify → merge → filter, as the CLI drives it.

use relnav_core::config::{AnalysisConfig, MinBlockSize};
use relnav_core::merge::merge;
use relnav_core::model::{ChangeKind, dominant_kind};
use relnav_core::parse::parse_changelog;
use relnav_core::range::filter_range;
use relnav_core::version::VersionId;

const DOC_A: &str = "\
# CHANGELOG-1.22

## v1.22.0

### Urgent Upgrade Notes
- CronJob batch/v1beta1 API removed; users should migrate
- PodSecurityPolicy is deprecated and will be removed in 1.25
- Breaking change: the --insecure-port flag no longer works

## v1.21.2

### Changes by Kind
- Fixed CVE-2021-25741 security vulnerability in subpath handling
- Added support for memory-backed volumes sizing
";

const DOC_B: &str = "\
# CHANGELOG-1.24

## v1.24.0

### Urgent Upgrade Notes
- Dockershim removed from kubelet; container-runtime must migrate to containerd
- Service account token secrets are no longer auto-generated

## v1.22.0
- stale duplicate section for 1.22.0 from the later document, ignored by merge
- it removed nothing and added nothing of note
";

fn config() -> AnalysisConfig {
    AnalysisConfig {
        min_block: MinBlockSize::Chars(30),
        ..AnalysisConfig::default()
    }
}

#[test]
fn two_documents_merge_with_first_seen_precedence() {
    let merged = merge([
        parse_changelog(DOC_A, &config()),
        parse_changelog(DOC_B, &config()),
    ]);

    let versions: Vec<VersionId> = merged.iter().map(|r| r.version).collect();
    assert_eq!(
        versions,
        [
            VersionId::new(1, 22, 0),
            VersionId::new(1, 21, 2),
            VersionId::new(1, 24, 0),
        ]
    );

    // 1.22.0 came from DOC_A, not the stale DOC_B section.
    let v22 = &merged[0];
    assert!(v22.raw_text.contains("Urgent Upgrade Notes"));
    assert!(!v22.raw_text.contains("stale duplicate"));
}

#[test]
fn filtered_set_is_ascending_and_inclusive() {
    let merged = merge([
        parse_changelog(DOC_A, &config()),
        parse_changelog(DOC_B, &config()),
    ]);
    let selection = filter_range(
        merged,
        VersionId::new(1, 21, 2),
        VersionId::new(1, 24, 0),
        15,
    );
    assert!(!selection.fallback);
    let versions: Vec<VersionId> = selection.records.iter().map(|r| r.version).collect();
    assert_eq!(
        versions,
        [
            VersionId::new(1, 21, 2),
            VersionId::new(1, 22, 0),
            VersionId::new(1, 24, 0),
        ]
    );
}

#[test]
fn classification_surfaces_the_expected_kinds() {
    let records = parse_changelog(DOC_A, &config());
    let v22 = &records[0];

    assert!(v22.has_kind(ChangeKind::Removal));
    assert!(v22.has_kind(ChangeKind::Deprecation));
    assert!(v22.has_kind(ChangeKind::Breaking));
    assert_eq!(dominant_kind(&v22.changes), Some(ChangeKind::Breaking));

    let v21 = &records[1];
    assert!(v21.has_kind(ChangeKind::Security));
    assert!(v21.has_kind(ChangeKind::Feature));
    assert!(!v21.has_kind(ChangeKind::Breaking));
}

#[test]
fn deprecation_line_never_doubles_as_removal() {
    let records = parse_changelog(DOC_A, &config());
    let psp_records: Vec<_> = records[0]
        .changes
        .iter()
        .filter(|c| c.description.contains("PodSecurityPolicy"))
        .collect();
    assert!(
        psp_records
            .iter()
            .any(|c| c.kind == ChangeKind::Deprecation)
    );
    assert!(
        psp_records
            .iter()
            .all(|c| c.kind != ChangeKind::Removal)
    );
}

#[test]
fn whole_pipeline_is_idempotent() {
    let run = || {
        let merged = merge([
            parse_changelog(DOC_A, &config()),
            parse_changelog(DOC_B, &config()),
        ]);
        filter_range(
            merged,
            VersionId::new(1, 20, 0),
            VersionId::new(1, 24, 0),
            15,
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn tiny_blocks_are_dropped_by_threshold() {
    let text = "## v1.19.0\nok\n## v1.20.0\n- a change entry that clears the threshold easily\n";
    let records = parse_changelog(text, &config());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].version, VersionId::new(1, 20, 0));
}
