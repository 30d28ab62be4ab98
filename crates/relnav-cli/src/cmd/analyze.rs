//! `rn analyze` — the end-to-end analysis pipeline.
//!
//! Gathers changelog text (local files first, in argument order, then
//! fetched documents for the two endpoints), parses and classifies
//! each source, merges with first-seen precedence, bounds the version
//! set, builds the upgrade chain, and renders the report.
//!
//! Source ordering is fixed and reproducible, so repeated runs over
//! the same documents produce identical reports.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use relnav_core::config::{AnalysisConfig, MinBlockSize};
use relnav_core::merge::merge;
use relnav_core::model::VersionRecord;
use relnav_core::parse::parse_changelog;
use relnav_core::range::filter_range;
use relnav_core::version::VersionId;
use relnav_graph::{UpgradePathGraph, analyze_path};

use crate::fetch::{Tool, fetch_changelog};
use crate::output::OutputMode;
use crate::report::AnalysisReport;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Tool whose changelogs to analyze.
    #[arg(long, value_enum, default_value_t = Tool::Kubernetes)]
    pub tool: Tool,

    /// Version currently deployed, e.g. `1.20.0` or `v1.20`.
    #[arg(long)]
    pub current: String,

    /// Version to upgrade to.
    #[arg(long)]
    pub target: String,

    /// Local changelog document(s); repeatable, merged in argument
    /// order ahead of fetched sources.
    #[arg(long = "changelog-file", value_name = "PATH")]
    pub changelog_files: Vec<PathBuf>,

    /// Skip network fetching; analyze local files only.
    #[arg(long)]
    pub offline: bool,

    /// TOML config file overriding analysis defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Cap on versions kept when the bounded range is empty.
    #[arg(long, value_name = "N")]
    pub fallback_cap: Option<usize>,

    /// Minimum stripped characters for a version block to count.
    #[arg(long, value_name = "N")]
    pub min_block_chars: Option<usize>,
}

impl AnalyzeArgs {
    /// Resolve the effective analysis config from file and flags.
    fn analysis_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                AnalysisConfig::from_toml_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => AnalysisConfig::default(),
        };
        if let Some(cap) = self.fallback_cap {
            config.fallback_cap = cap;
        }
        if let Some(chars) = self.min_block_chars {
            config.min_block = MinBlockSize::Chars(chars);
        }
        Ok(config)
    }

    /// Collect raw changelog documents in fixed merge order.
    fn gather_sources(&self, current: VersionId, target: VersionId) -> Result<Vec<String>> {
        let mut sources = Vec::new();

        for path in &self.changelog_files {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading changelog {}", path.display()))?;
            sources.push(text);
        }

        if !self.offline {
            let current_doc = fetch_changelog(self.tool, current);
            let target_doc = fetch_changelog(self.tool, target);
            // The two endpoints may live in the same document; keep it once.
            let duplicate = matches!(
                (&current_doc, &target_doc),
                (Some(a), Some(b)) if a == b
            );
            sources.extend(current_doc);
            if !duplicate {
                sources.extend(target_doc);
            }
        }

        Ok(sources)
    }
}

/// Execute `rn analyze`.
///
/// # Errors
///
/// Fails when a requested version string is malformed, an explicitly
/// named file cannot be read, or no changelog source yields any data.
/// Unreachable remote sources alone are not fatal while at least one
/// source survives.
pub fn run_analyze(args: &AnalyzeArgs, mode: OutputMode, w: &mut dyn Write) -> Result<()> {
    let current = VersionId::parse(&args.current)
        .with_context(|| format!("invalid --current {:?}", args.current))?;
    let target = VersionId::parse(&args.target)
        .with_context(|| format!("invalid --target {:?}", args.target))?;

    let config = args.analysis_config()?;
    let sources = args.gather_sources(current, target)?;
    if sources.is_empty() {
        anyhow::bail!(
            "no changelog data available for {} {current} -> {target}; \
             every source failed or none was given",
            args.tool
        );
    }
    info!(sources = sources.len(), tool = %args.tool, "analyzing changelog sources");

    let parsed: Vec<Vec<VersionRecord>> = sources
        .iter()
        .map(|text| parse_changelog(text, &config))
        .collect();
    let merged = merge(parsed);
    debug!(versions = merged.len(), "merged version set");

    let selection = filter_range(merged, current, target, config.fallback_cap);
    let graph = UpgradePathGraph::build(&selection.records);
    let path = analyze_path(&graph, current, target);

    let report = AnalysisReport::assemble(args.tool, current, target, &selection, path);
    report.render(mode, w)
}
