//! Full single-document pipeline: segment, classify, dedup.

use tracing::debug;

use crate::classify::classify;
use crate::config::AnalysisConfig;
use crate::merge::dedup_first_seen;
use crate::model::VersionRecord;
use crate::segment::segment;

/// Parse one changelog document into version records.
///
/// Segments `text` into per-version blocks, classifies each block's
/// lines, and applies the first-seen rule so version ids are unique
/// within the pass. Deterministic: the same text always produces the
/// same records.
#[must_use]
pub fn parse_changelog(text: &str, config: &AnalysisConfig) -> Vec<VersionRecord> {
    let blocks = segment(text, config);
    debug!(blocks = blocks.len(), "segmented changelog document");

    let records = blocks.into_iter().map(|block| VersionRecord {
        version: block.version,
        changes: classify(&block.text, block.version),
        raw_text: block.text,
    });

    dedup_first_seen(records)
}
