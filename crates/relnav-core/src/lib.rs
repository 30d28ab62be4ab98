#![forbid(unsafe_code)]
//! relnav-core: changelog segmentation, classification, and version-set
//! assembly.
//!
//! # Pipeline
//!
//! ```text
//! raw changelog text
//!        ↓  segment::segment()           per-version blocks
//!        ↓  classify::classify()         typed change records
//!        ↓  merge::merge()               first-seen dedup across sources
//!        ↓  range::filter_range()        ordered, bounded subset
//! ```
//!
//! The crate is pure and synchronous: text and version bounds arrive as
//! already-resident values, nothing here touches the network or disk,
//! and no state is shared between analysis passes. Fetching documents
//! and persisting results are collaborator concerns.
//!
//! # Conventions
//!
//! - **Errors**: typed [`Error`] where a caller can act; recoverable
//!   conditions are values, not errors.
//! - **Logging**: `tracing` macros (`info!`, `debug!`, `trace!`).

pub mod classify;
pub mod config;
pub mod error;
pub mod merge;
pub mod model;
pub mod parse;
pub mod range;
pub mod segment;
pub mod version;

pub use config::{AnalysisConfig, MinBlockSize};
pub use error::Error;
pub use model::{ChangeCounts, ChangeKind, ChangeRecord, VersionRecord, dominant_kind};
pub use parse::parse_changelog;
pub use range::RangeSelection;
pub use version::VersionId;
