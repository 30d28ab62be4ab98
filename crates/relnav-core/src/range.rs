//! Ordering and bounding of the merged version set.
//!
//! Strict inclusive bounding frequently yields nothing: fetched
//! changelogs often do not contain the exact boundary versions a user
//! typed. When that happens the documented fallback applies — the full
//! merged set, sorted ascending and truncated to a configured cap, is
//! used instead, and the outcome is flagged so callers can say so.

use tracing::info;

use crate::model::VersionRecord;
use crate::version::VersionId;

/// Outcome of range filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSelection {
    /// Surviving records, strictly ascending by version id.
    pub records: Vec<VersionRecord>,
    /// True when the bounded filter was empty and the capped full set
    /// was substituted.
    pub fallback: bool,
}

/// Sort `records` ascending and keep `start <= version <= end`.
///
/// When the bounded result is empty, falls back to the full set
/// truncated to `fallback_cap` (still ascending) and marks the
/// selection accordingly.
#[must_use]
pub fn filter_range(
    records: Vec<VersionRecord>,
    start: VersionId,
    end: VersionId,
    fallback_cap: usize,
) -> RangeSelection {
    let mut sorted = records;
    sorted.sort_by_key(|r| r.version);

    let in_range = |r: &VersionRecord| start <= r.version && r.version <= end;

    if sorted.iter().any(in_range) {
        sorted.retain(in_range);
        RangeSelection {
            records: sorted,
            fallback: false,
        }
    } else {
        info!(
            %start,
            %end,
            cap = fallback_cap,
            "bounded range is empty, falling back to capped full set"
        );
        sorted.truncate(fallback_cap);
        RangeSelection {
            records: sorted,
            fallback: true,
        }
    }
}
