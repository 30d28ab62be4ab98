//! Analysis configuration.
//!
//! Two knobs exist and both are deliberate: the minimum block size that
//! keeps near-empty version sections out of the record set, and the cap
//! applied when the bounded range filter comes back empty and the full
//! merged set is used instead. Neither encodes a product requirement;
//! the defaults mirror observed changelog shapes.

use serde::{Deserialize, Serialize};

/// Strictness of the minimum-size rule applied to a version block
/// before it is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinBlockSize {
    /// Retain a block only if its stripped text exceeds this many chars.
    Chars(usize),
    /// Retain a block only if it spans more than this many lines.
    Lines(usize),
}

impl MinBlockSize {
    /// True when a block with `stripped_chars` of trimmed text across
    /// `lines` lines passes the threshold.
    #[must_use]
    pub const fn accepts(self, stripped_chars: usize, lines: usize) -> bool {
        match self {
            Self::Chars(min) => stripped_chars > min,
            Self::Lines(min) => lines > min,
        }
    }
}

/// Tunables for one analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum block size; blocks at or below it are silently dropped.
    #[serde(default = "default_min_block")]
    pub min_block: MinBlockSize,
    /// Maximum number of versions kept when the bounded filter is empty
    /// and the full merged set is used as a fallback.
    #[serde(default = "default_fallback_cap")]
    pub fallback_cap: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_block: default_min_block(),
            fallback_cap: default_fallback_cap(),
        }
    }
}

impl AnalysisConfig {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the underlying TOML error when the document is invalid.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

const fn default_min_block() -> MinBlockSize {
    MinBlockSize::Chars(50)
}

const fn default_fallback_cap() -> usize {
    15
}
