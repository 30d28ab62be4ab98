//! Changelog segmentation: raw text → ordered per-version blocks.
//!
//! # Overview
//!
//! A single line-by-line scan splits a changelog document into
//! contiguous blocks, one per version header. A header is 1–4 `#`
//! markers, whitespace, an optional `v`, and a dotted numeric version
//! with two or three components (`## v1.24.0`, `# 1.24`).
//!
//! The scan is a fold over lines with an explicit [`SegmentState`]
//! accumulator — no shared mutable session state. State machine:
//! `NoVersionOpen → VersionOpen → (header seen) → VersionOpen(new)`,
//! with a flush-if-large-enough action on every transition out of
//! `VersionOpen`, including end of input. Blocks at or below the
//! configured minimum size are silently dropped.
//!
//! Non-header lines are appended verbatim (blank lines included) so
//! the classifier keeps line context. If the same version header
//! appears twice non-contiguously, each occurrence starts an
//! independent block; later duplicates are dropped by the first-seen
//! rule in [`crate::merge`], never concatenated.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::config::AnalysisConfig;
use crate::version::VersionId;

/// `#`-style header with a 2- or 3-component dotted version.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#{1,4}\s+v?(\d+)\.(\d+)(?:\.(\d+))?\b").expect("header pattern is valid")
});

/// One contiguous per-version slice of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// Version parsed from the header line.
    pub version: VersionId,
    /// Block text starting with the header line itself.
    pub text: String,
}

/// Parse a version header line, if `line` is one.
///
/// Numeric components that overflow `u32` make the line a non-header;
/// the affected input is skipped rather than failing the run.
#[must_use]
pub fn header_version(line: &str) -> Option<VersionId> {
    let caps = HEADER_RE.captures(line)?;
    let component = |i: usize| caps.get(i).map_or(Some(0), |m| m.as_str().parse().ok());
    Some(VersionId::new(component(1)?, component(2)?, component(3)?))
}

/// Fold accumulator for the segmentation scan.
#[derive(Default)]
struct SegmentState<'a> {
    blocks: Vec<RawBlock>,
    open: Option<OpenBlock<'a>>,
}

struct OpenBlock<'a> {
    version: VersionId,
    lines: Vec<&'a str>,
}

impl SegmentState<'_> {
    /// Close the open block, keeping it only if it passes the minimum
    /// size rule.
    fn flush(&mut self, config: &AnalysisConfig) {
        let Some(open) = self.open.take() else {
            return;
        };
        let text = open.lines.join("\n");
        if config.min_block.accepts(text.trim().len(), open.lines.len()) {
            self.blocks.push(RawBlock {
                version: open.version,
                text,
            });
        } else {
            trace!(version = %open.version, "dropping under-sized block");
        }
    }
}

/// Split `text` into ordered per-version blocks.
///
/// Text before the first version header is ignored. The returned order
/// is document order; the same version may appear more than once when
/// the document repeats a header (see module docs).
#[must_use]
pub fn segment(text: &str, config: &AnalysisConfig) -> Vec<RawBlock> {
    let mut state = text.lines().fold(SegmentState::default(), |mut state, line| {
        if let Some(version) = header_version(line) {
            state.flush(config);
            state.open = Some(OpenBlock {
                version,
                lines: vec![line],
            });
        } else if let Some(open) = state.open.as_mut() {
            open.lines.push(line);
        }
        state
    });
    state.flush(config);
    state.blocks
}

#[cfg(test)]
mod tests {
    use super::{RawBlock, header_version, segment};
    use crate::config::{AnalysisConfig, MinBlockSize};
    use crate::version::VersionId;

    fn config() -> AnalysisConfig {
        AnalysisConfig {
            min_block: MinBlockSize::Chars(10),
            ..AnalysisConfig::default()
        }
    }

    #[test]
    fn header_accepts_one_to_four_markers_and_optional_v() {
        assert_eq!(header_version("# v1.24.0"), Some(VersionId::new(1, 24, 0)));
        assert_eq!(header_version("#### 1.24"), Some(VersionId::new(1, 24, 0)));
        assert_eq!(header_version("##### 1.24.0"), None);
        assert_eq!(header_version("## Changelog"), None);
        assert_eq!(header_version("version 1.24.0"), None);
    }

    #[test]
    fn splits_into_ordered_blocks_preserving_lines() {
        let text = "preamble ignored\n\
                    ## v1.20.0\n\
                    - first change entry here\n\
                    \n\
                    - second change entry here\n\
                    ## v1.21.0\n\
                    - only change of this release\n";
        let blocks = segment(text, &config());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].version, VersionId::new(1, 20, 0));
        // Header line and blank line are preserved verbatim.
        assert!(blocks[0].text.starts_with("## v1.20.0\n"));
        assert!(blocks[0].text.contains("\n\n"));
        assert_eq!(blocks[1].version, VersionId::new(1, 21, 0));
    }

    #[test]
    fn under_sized_blocks_never_appear() {
        let text = "## v1.20.0\nok\n## v1.21.0\n- a change large enough to keep\n";
        let blocks = segment(text, &config());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].version, VersionId::new(1, 21, 0));
    }

    #[test]
    fn last_open_block_is_flushed_at_end_of_input() {
        let text = "## v1.22.0\n- trailing block with no following header\n";
        let blocks = segment(text, &config());
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn repeated_headers_start_independent_blocks() {
        let text = "## v1.20.0\n- first occurrence with enough text\n\
                    ## v1.21.0\n- middle block with enough text\n\
                    ## v1.20.0\n- second occurrence, also big enough\n";
        let blocks = segment(text, &config());
        let versions: Vec<VersionId> = blocks.iter().map(|b| b.version).collect();
        assert_eq!(
            versions,
            [
                VersionId::new(1, 20, 0),
                VersionId::new(1, 21, 0),
                VersionId::new(1, 20, 0),
            ]
        );
    }

    #[test]
    fn line_threshold_mode_counts_lines() {
        let config = AnalysisConfig {
            min_block: MinBlockSize::Lines(2),
            ..AnalysisConfig::default()
        };
        let text = "## v1.20.0\nx\n## v1.21.0\ny\nz\n";
        let blocks = segment(text, &config);
        assert_eq!(
            blocks,
            vec![RawBlock {
                version: VersionId::new(1, 21, 0),
                text: "## v1.21.0\ny\nz".into(),
            }]
        );
    }
}
