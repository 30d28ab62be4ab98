//! First-seen merging of version records across fetched sources.
//!
//! Multiple changelog documents frequently describe overlapping version
//! ranges (the per-minor Kubernetes documents each repeat patch
//! history, for example). The merge rule is deliberately blunt: one
//! left-to-right pass over all inputs in call order, keeping the first
//! record seen for each [`VersionId`] and discarding every later one
//! for that id — even when the later record has richer content.
//! Callers control precedence by ordering their inputs; the rule makes
//! fetch ordering a determinism concern, never a correctness one.

use std::collections::HashSet;

use tracing::debug;

use crate::model::VersionRecord;
use crate::version::VersionId;

/// Merge multiple record sequences, first-seen per version id wins.
///
/// Output preserves first-seen order across the concatenated inputs.
#[must_use]
pub fn merge<I>(sources: I) -> Vec<VersionRecord>
where
    I: IntoIterator<Item = Vec<VersionRecord>>,
{
    dedup_first_seen(sources.into_iter().flatten())
}

/// Single-pass first-seen dedup by version id.
///
/// Also used within one parse pass, where a document that repeats a
/// version header produces independent blocks and only the first
/// survives.
#[must_use]
pub fn dedup_first_seen<I>(records: I) -> Vec<VersionRecord>
where
    I: IntoIterator<Item = VersionRecord>,
{
    let mut seen: HashSet<VersionId> = HashSet::new();
    let mut kept = Vec::new();
    for record in records {
        if seen.insert(record.version) {
            kept.push(record);
        } else {
            debug!(version = %record.version, "discarding duplicate version record");
        }
    }
    kept
}
