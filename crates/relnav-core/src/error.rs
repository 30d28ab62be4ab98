//! Error types for changelog parsing.
//!
//! Nothing in this crate is fatal to a whole analysis run: a malformed
//! version skips the affected input, an unreachable source is reported
//! by the fetch layer as "no data", an empty post-filter set triggers
//! the documented fallback in [`crate::range`], and a missing graph
//! path is an ordinary empty result. The only typed error surfaced
//! here is the one callers can actually act on.

/// Error raised when a version string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input did not contain at least two dotted numeric components.
    #[error("malformed version {input:?}: expected `major.minor[.patch]` with numeric components")]
    MalformedVersion {
        /// The rejected input, as given.
        input: String,
    },
}
