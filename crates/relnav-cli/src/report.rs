//! Analysis report assembly and rendering.
//!
//! The JSON form of [`AnalysisReport`] is the hand-off to downstream
//! consumers (index stores, answer generators): version ids as strings,
//! kinds as snake_case labels, flags and counts as plain fields.

use std::io::{self, Write};

use serde::Serialize;

use relnav_core::model::{ChangeCounts, ChangeKind, ChangeRecord, dominant_kind};
use relnav_core::range::RangeSelection;
use relnav_core::version::VersionId;
use relnav_graph::PathAnalysis;

use crate::fetch::Tool;
use crate::output::{OutputMode, emit_json, pretty_kv, pretty_rule};

/// Rollup of one analyzed version for display.
#[derive(Debug, Clone, Serialize)]
pub struct VersionSummary {
    /// The version.
    pub version: VersionId,
    /// Highest-priority kind among this version's changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_kind: Option<ChangeKind>,
    /// Per-kind counts.
    pub counts: ChangeCounts,
    /// Every extracted change, in source order.
    pub changes: Vec<ChangeRecord>,
}

/// The full result of one analysis request.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Tool whose changelogs were analyzed.
    pub tool: Tool,
    /// Requested starting version.
    pub current: VersionId,
    /// Requested target version.
    pub target: VersionId,
    /// True when the bounded range filter was empty and the capped
    /// full set was analyzed instead.
    pub fallback_used: bool,
    /// Counts summed over every analyzed version.
    pub totals: ChangeCounts,
    /// Per-version rollups, ascending.
    pub versions: Vec<VersionSummary>,
    /// Chain walk between the endpoints; empty nodes mean "no path".
    pub path: PathAnalysis,
}

impl AnalysisReport {
    /// Assemble a report from the filtered selection and path walk.
    #[must_use]
    pub fn assemble(
        tool: Tool,
        current: VersionId,
        target: VersionId,
        selection: &RangeSelection,
        path: PathAnalysis,
    ) -> Self {
        let mut totals = ChangeCounts::default();
        let versions = selection
            .records
            .iter()
            .map(|record| {
                let counts = record.counts();
                totals.merge(&counts);
                VersionSummary {
                    version: record.version,
                    dominant_kind: dominant_kind(&record.changes),
                    counts,
                    changes: record.changes.clone(),
                }
            })
            .collect();

        Self {
            tool,
            current,
            target,
            fallback_used: selection.fallback,
            totals,
            versions,
            path,
        }
    }

    /// Render the report in the requested mode.
    ///
    /// # Errors
    ///
    /// Returns an error when writing or JSON serialization fails.
    pub fn render(&self, mode: OutputMode, w: &mut dyn Write) -> anyhow::Result<()> {
        match mode {
            OutputMode::Json => emit_json(self, w),
            OutputMode::Pretty => Ok(self.render_pretty(w)?),
            OutputMode::Text => Ok(self.render_text(w)?),
        }
    }

    fn render_pretty(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "relnav upgrade analysis")?;
        pretty_rule(w)?;
        pretty_kv(w, "tool", self.tool.label())?;
        pretty_kv(w, "from", self.current.to_string())?;
        pretty_kv(w, "to", self.target.to_string())?;
        pretty_kv(w, "versions", self.versions.len().to_string())?;
        if self.fallback_used {
            writeln!(
                w,
                "note: no versions inside the requested range; showing the capped full set"
            )?;
        }
        pretty_rule(w)?;

        for summary in &self.versions {
            let headline = summary
                .dominant_kind
                .map_or_else(|| "no notable changes".to_string(), |k| format!("[{k}]"));
            writeln!(
                w,
                "{}  {}  ({} changes)",
                summary.version,
                headline,
                summary.counts.total()
            )?;
            for change in &summary.changes {
                match &change.component {
                    Some(component) => writeln!(
                        w,
                        "  • [{}] {} (component: {component})",
                        change.kind, change.description
                    )?,
                    None => writeln!(w, "  • [{}] {}", change.kind, change.description)?,
                }
            }
            writeln!(w)?;
        }

        pretty_rule(w)?;
        if self.path.is_no_path() {
            writeln!(
                w,
                "no contiguous upgrade path between {} and {} in the analyzed set",
                self.current, self.target
            )?;
        } else {
            let steps: Vec<String> = self
                .path
                .nodes
                .iter()
                .map(|n| {
                    if n.has_breaking {
                        format!("{}!", n.version)
                    } else {
                        n.version.to_string()
                    }
                })
                .collect();
            writeln!(w, "upgrade path: {}", steps.join(" -> "))?;
            writeln!(
                w,
                "critical versions on path (breaking changes): {}",
                self.path.critical_count
            )?;
        }
        Ok(())
    }

    fn render_text(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "analysis\t{}\t{}\t{}\tfallback={}",
            self.tool, self.current, self.target, self.fallback_used
        )?;
        for summary in &self.versions {
            for change in &summary.changes {
                writeln!(
                    w,
                    "change\t{}\t{}\t{}\t{}",
                    change.version,
                    change.kind,
                    change.component.as_deref().unwrap_or("-"),
                    change.description
                )?;
            }
        }
        let path_versions: Vec<String> = self
            .path
            .nodes
            .iter()
            .map(|n| n.version.to_string())
            .collect();
        writeln!(
            w,
            "path\t{}\tcritical={}",
            if path_versions.is_empty() {
                "none".to_string()
            } else {
                path_versions.join(",")
            },
            self.path.critical_count
        )?;
        Ok(())
    }
}
