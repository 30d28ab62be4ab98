//! Upgrade-path graph construction.
//!
//! # Overview
//!
//! Builds a [`petgraph`] directed graph over a filtered version set.
//! Each node carries a [`VersionNode`] summary (risk flags plus
//! per-kind counts); the only edge relation is `PRECEDES`, linking each
//! version to the next-greater version *present in the set* — never to
//! non-adjacent versions and never across declared dependencies. The
//! result is always a simple chain.
//!
//! ## Known limitation
//!
//! Real release histories branch (parallel patch trains, backports).
//! The chain is a deliberate simplification: path queries are only
//! meaningful over the subset of versions that actually survived
//! merging and filtering.
//!
//! ## Lifecycle
//!
//! A graph is built fresh for every analysis request from the current
//! filtered set. There is no incremental update; prior graph state is
//! simply dropped.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use relnav_core::model::{ChangeCounts, ChangeKind, VersionRecord};
use relnav_core::version::VersionId;

/// Node summary: one analyzed version with aggregated risk signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionNode {
    /// The version this node summarizes.
    pub version: VersionId,
    /// Any breaking change extracted for this version.
    pub has_breaking: bool,
    /// Any deprecation extracted for this version.
    pub has_deprecation: bool,
    /// Any removal extracted for this version.
    pub has_removal: bool,
    /// Any security fix extracted for this version.
    pub has_security: bool,
    /// Per-kind change counts.
    pub counts: ChangeCounts,
}

impl VersionNode {
    /// Summarize one version record.
    #[must_use]
    pub fn from_record(record: &VersionRecord) -> Self {
        Self {
            version: record.version,
            has_breaking: record.has_kind(ChangeKind::Breaking),
            has_deprecation: record.has_kind(ChangeKind::Deprecation),
            has_removal: record.has_kind(ChangeKind::Removal),
            has_security: record.has_kind(ChangeKind::Security),
            counts: record.counts(),
        }
    }
}

/// The single edge relation: this version directly precedes the next
/// version present in the analyzed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Precedes;

/// A linear precedence chain over an analyzed version set.
#[derive(Debug)]
pub struct UpgradePathGraph {
    graph: DiGraph<VersionNode, Precedes>,
    node_map: HashMap<VersionId, NodeIndex>,
}

impl UpgradePathGraph {
    /// Build the chain from a filtered version set.
    ///
    /// Records are sorted ascending by version id (re-sorting is cheap
    /// and keeps the chain invariant independent of caller ordering);
    /// one `PRECEDES` edge links each consecutive pair.
    #[instrument(skip(records), fields(count = records.len()))]
    #[must_use]
    pub fn build(records: &[VersionRecord]) -> Self {
        let mut nodes: Vec<VersionNode> = records.iter().map(VersionNode::from_record).collect();
        nodes.sort_by_key(|n| n.version);

        let mut graph = DiGraph::new();
        let mut node_map = HashMap::with_capacity(nodes.len());

        let mut previous: Option<NodeIndex> = None;
        for node in nodes {
            let version = node.version;
            let idx = graph.add_node(node);
            node_map.insert(version, idx);
            if let Some(prev) = previous {
                graph.add_edge(prev, idx, Precedes);
            }
            previous = Some(idx);
        }

        Self { graph, node_map }
    }

    /// Node summary for `version`, if present.
    #[must_use]
    pub fn node(&self, version: VersionId) -> Option<&VersionNode> {
        self.node_map.get(&version).map(|idx| &self.graph[*idx])
    }

    /// Number of versions in the chain.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of `PRECEDES` edges (`node_count - 1` for a non-empty
    /// chain).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True when the graph has no versions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// All node summaries in ascending chain order.
    #[must_use]
    pub fn nodes(&self) -> Vec<&VersionNode> {
        let mut nodes: Vec<&VersionNode> = self.graph.node_weights().collect();
        nodes.sort_by_key(|n| n.version);
        nodes
    }

    /// Walk `PRECEDES` edges from `start` to `end`, inclusive.
    ///
    /// Returns the node summaries along the chain, or an empty vector
    /// when no contiguous chain connects the endpoints: either endpoint
    /// absent, or `start > end`. Absence of a path is an ordinary
    /// result, never an error.
    #[must_use]
    pub fn path(&self, start: VersionId, end: VersionId) -> Vec<VersionNode> {
        let Some(&start_idx) = self.node_map.get(&start) else {
            return Vec::new();
        };
        if !self.node_map.contains_key(&end) || start > end {
            return Vec::new();
        }

        let mut nodes = Vec::new();
        let mut current = start_idx;
        loop {
            let node = &self.graph[current];
            nodes.push(node.clone());
            if node.version == end {
                return nodes;
            }
            // A chain node has at most one outgoing PRECEDES edge.
            match self.graph.neighbors(current).next() {
                Some(next) => current = next,
                None => return Vec::new(),
            }
        }
    }
}
