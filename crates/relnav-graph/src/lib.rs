#![forbid(unsafe_code)]
//! relnav-graph: upgrade-path graph model.
//!
//! # Pipeline
//!
//! ```text
//! filtered Vec<VersionRecord>
//!        ↓  build::UpgradePathGraph::build()
//! linear PRECEDES chain (petgraph DiGraph)
//!        ↓  path::analyze_path()
//! PathAnalysis (ordered node summaries + critical version count)
//! ```
//!
//! Rebuilt from scratch per analysis request; no caching, no
//! incremental update, no state shared between requests.

pub mod build;
pub mod path;

pub use build::{Precedes, UpgradePathGraph, VersionNode};
pub use path::{PathAnalysis, analyze_path};
