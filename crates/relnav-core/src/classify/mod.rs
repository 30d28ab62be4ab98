//! Line classification against a declarative trigger table.
//!
//! # Overview
//!
//! Every non-empty, non-header line of a version block is tested
//! against [`RULE_TABLE`], an ordered list of `(kind, patterns)` pairs.
//! A line yields one [`ChangeRecord`] per kind with at least one
//! matching trigger — multi-label output is expected and is never
//! collapsed. This is deterministic pattern matching, not NLP; coverage
//! is best-effort by design.
//!
//! # Evaluation order
//!
//! The table is evaluated in declaration order: Breaking, Deprecation,
//! Removal, Security, Feature, BugFix, BehaviorChange. Deprecation runs
//! before Removal because the Removal rule excludes lines already
//! labeled Deprecation ("deprecated and will be removed" is one
//! deprecation, not also a removal). All other kinds co-occur freely.
//! Display priority for dominant-kind rollups is separate — see
//! [`ChangeKind::priority`].
//!
//! New kinds or triggers are added by extending the table; the control
//! flow below never changes.

mod component;

use std::sync::LazyLock;

use regex::Regex;

pub use component::extract_component;

use crate::model::{ChangeKind, ChangeRecord};
use crate::version::VersionId;

/// The trigger table: each kind with its case-insensitive patterns,
/// in evaluation order.
pub const RULE_TABLE: [(ChangeKind, &[&str]); 7] = [
    (
        ChangeKind::Breaking,
        &[
            r"\bbreaking\b",
            r"\bincompatible\b",
            r"\bno longer\b",
            r"\bmust\b.*\b(?:update|change|migrate)\b",
            r"\bremoved?\b.*\b(?:api|feature|support)\b",
        ],
    ),
    (
        ChangeKind::Deprecation,
        &[r"\bdeprecat", r"\bwill be removed\b", r"\blegacy\b"],
    ),
    (
        ChangeKind::Removal,
        &[r"\bremoved?\b", r"\bdeleted?\b", r"\bdropped?\b"],
    ),
    (
        ChangeKind::Security,
        &[
            r"\bcve-\d{4}-\d+",
            r"\bsecurity\b",
            r"\bvulnerabilit(?:y|ies)\b",
            r"\bpatch(?:es|ed)?\b.*\bsecurity\b",
        ],
    ),
    (
        ChangeKind::Feature,
        &[
            r"\bnew feature\b",
            r"\badded?\b",
            r"\bintroduced?\b",
            r"\bga\b",
        ],
    ),
    (
        ChangeKind::BugFix,
        &[r"\bfix(?:es|ed)?\b", r"\bbugfix(?:es)?\b", r"\bresolved?\b"],
    ),
    (
        ChangeKind::BehaviorChange,
        &[
            r"\bbehaviou?r(?:al)? change",
            r"\bdefaults?\b.*\bchanged?\b",
            r"\bnow defaults? to\b",
        ],
    ),
];

static COMPILED_RULES: LazyLock<Vec<(ChangeKind, Vec<Regex>)>> = LazyLock::new(|| {
    RULE_TABLE
        .iter()
        .map(|(kind, sources)| {
            let patterns = sources
                .iter()
                .map(|source| {
                    Regex::new(&format!("(?i){source}")).expect("trigger pattern is valid")
                })
                .collect();
            (*kind, patterns)
        })
        .collect()
});

/// Classify every line of a version block.
///
/// Skips empty lines and `#` header lines. Each matching kind produces
/// one record with the trimmed line as its description and the
/// component label from [`extract_component`] on the same line.
/// Records come out in source-line order, table order within a line.
#[must_use]
pub fn classify(block_text: &str, version: VersionId) -> Vec<ChangeRecord> {
    let mut records = Vec::new();

    for line in block_text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut deprecated = false;
        for (kind, patterns) in COMPILED_RULES.iter() {
            if *kind == ChangeKind::Removal && deprecated {
                continue;
            }
            if patterns.iter().any(|pattern| pattern.is_match(trimmed)) {
                if *kind == ChangeKind::Deprecation {
                    deprecated = true;
                }
                records.push(ChangeRecord {
                    version,
                    kind: *kind,
                    description: trimmed.to_string(),
                    component: extract_component(trimmed),
                });
            }
        }
    }

    records
}
