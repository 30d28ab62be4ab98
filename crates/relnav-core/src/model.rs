//! Core data model: change kinds, change records, version records.

use serde::{Deserialize, Serialize};

use crate::version::VersionId;

/// The closed set of change categories a changelog line can express.
///
/// A single line may carry several kinds at once (multi-label); when a
/// single "dominant" kind is needed for display, use
/// [`ChangeKind::priority`] — lower value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Incompatible change requiring caller action.
    Breaking,
    /// Marked for future removal; still present.
    Deprecation,
    /// Something was removed, deleted, or dropped.
    Removal,
    /// Security fix or vulnerability notice.
    Security,
    /// New capability.
    Feature,
    /// Defect fix.
    BugFix,
    /// Behavior or default changed without an API break.
    BehaviorChange,
}

impl ChangeKind {
    /// All kinds, in rule-table evaluation order.
    pub const ALL: [Self; 7] = [
        Self::Breaking,
        Self::Deprecation,
        Self::Removal,
        Self::Security,
        Self::Feature,
        Self::BugFix,
        Self::BehaviorChange,
    ];

    /// Display priority for dominant-kind rollups.
    ///
    /// Breaking > Security > Removal > Deprecation > Feature > BugFix >
    /// BehaviorChange; lower value means higher priority.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Breaking => 0,
            Self::Security => 1,
            Self::Removal => 2,
            Self::Deprecation => 3,
            Self::Feature => 4,
            Self::BugFix => 5,
            Self::BehaviorChange => 6,
        }
    }

    /// Stable lowercase label, matching the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breaking => "breaking",
            Self::Deprecation => "deprecation",
            Self::Removal => "removal",
            Self::Security => "security",
            Self::Feature => "feature",
            Self::BugFix => "bug_fix",
            Self::BehaviorChange => "behavior_change",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One classified statement extracted from changelog text.
///
/// Immutable once created; identity is structural. Grouping downstream
/// happens by `version` and `kind`, never by a record id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// The version whose block produced this record.
    pub version: VersionId,
    /// Classified category.
    pub kind: ChangeKind,
    /// Raw line text, trimmed but not truncated.
    pub description: String,
    /// Best-effort affected-component label; not guaranteed present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

/// All changes extracted for one version, plus the raw block text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    /// The version this block describes.
    pub version: VersionId,
    /// Extracted change records, in source-line order.
    pub changes: Vec<ChangeRecord>,
    /// The full block text, headers and blank lines preserved.
    pub raw_text: String,
}

impl VersionRecord {
    /// True if any change of `kind` was extracted for this version.
    #[must_use]
    pub fn has_kind(&self, kind: ChangeKind) -> bool {
        self.changes.iter().any(|c| c.kind == kind)
    }

    /// Per-kind counts over this version's changes.
    #[must_use]
    pub fn counts(&self) -> ChangeCounts {
        ChangeCounts::from_changes(&self.changes)
    }
}

/// Per-kind record counts; plain data for summaries and graph nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCounts {
    pub breaking: usize,
    pub deprecation: usize,
    pub removal: usize,
    pub security: usize,
    pub feature: usize,
    pub bug_fix: usize,
    pub behavior_change: usize,
}

impl ChangeCounts {
    /// Tally counts over a slice of change records.
    #[must_use]
    pub fn from_changes(changes: &[ChangeRecord]) -> Self {
        let mut counts = Self::default();
        for change in changes {
            counts.record(change.kind);
        }
        counts
    }

    /// Increment the count for one kind.
    pub const fn record(&mut self, kind: ChangeKind) {
        match kind {
            ChangeKind::Breaking => self.breaking += 1,
            ChangeKind::Deprecation => self.deprecation += 1,
            ChangeKind::Removal => self.removal += 1,
            ChangeKind::Security => self.security += 1,
            ChangeKind::Feature => self.feature += 1,
            ChangeKind::BugFix => self.bug_fix += 1,
            ChangeKind::BehaviorChange => self.behavior_change += 1,
        }
    }

    /// Count for one kind.
    #[must_use]
    pub const fn get(&self, kind: ChangeKind) -> usize {
        match kind {
            ChangeKind::Breaking => self.breaking,
            ChangeKind::Deprecation => self.deprecation,
            ChangeKind::Removal => self.removal,
            ChangeKind::Security => self.security,
            ChangeKind::Feature => self.feature,
            ChangeKind::BugFix => self.bug_fix,
            ChangeKind::BehaviorChange => self.behavior_change,
        }
    }

    /// Sum over all kinds.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.breaking
            + self.deprecation
            + self.removal
            + self.security
            + self.feature
            + self.bug_fix
            + self.behavior_change
    }

    /// Accumulate another tally into this one.
    pub const fn merge(&mut self, other: &Self) {
        self.breaking += other.breaking;
        self.deprecation += other.deprecation;
        self.removal += other.removal;
        self.security += other.security;
        self.feature += other.feature;
        self.bug_fix += other.bug_fix;
        self.behavior_change += other.behavior_change;
    }
}

/// The highest-priority kind among `changes`, for display rollups.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn dominant_kind(changes: &[ChangeRecord]) -> Option<ChangeKind> {
    changes.iter().map(|c| c.kind).min_by_key(|k| k.priority())
}
