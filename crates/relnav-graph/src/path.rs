//! Path queries and risk aggregation over the upgrade chain.

use serde::{Deserialize, Serialize};

use relnav_core::version::VersionId;

use crate::build::{UpgradePathGraph, VersionNode};

/// Result of walking the chain between two endpoints.
///
/// `nodes` is empty when no contiguous chain connects the endpoints —
/// "no path" is a value here, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathAnalysis {
    /// Node summaries along the path, ascending, endpoints inclusive.
    pub nodes: Vec<VersionNode>,
    /// Number of critical versions on the path (`has_breaking` set) —
    /// the single scalar risk signal.
    pub critical_count: usize,
}

impl PathAnalysis {
    /// True when the endpoints are not chain-connected.
    #[must_use]
    pub fn is_no_path(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Versions on the path flagged as critical.
    #[must_use]
    pub fn critical_versions(&self) -> Vec<VersionId> {
        self.nodes
            .iter()
            .filter(|n| n.has_breaking)
            .map(|n| n.version)
            .collect()
    }
}

/// Walk the chain from `start` to `end` and aggregate risk signals.
#[must_use]
pub fn analyze_path(graph: &UpgradePathGraph, start: VersionId, end: VersionId) -> PathAnalysis {
    let nodes = graph.path(start, end);
    let critical_count = nodes.iter().filter(|n| n.has_breaking).count();
    PathAnalysis {
        nodes,
        critical_count,
    }
}
