//! Canonical version identifiers.
//!
//! A [`VersionId`] is a `(major, minor, patch)` integer triple with the
//! canonical string form `"major.minor.patch"`. Parsing accepts two or
//! three dotted components and an optional leading `v`; a missing patch
//! component canonicalizes to `.0`, so `v1.24` and `1.24.0` are the
//! same identity. Ordering is lexicographic on the triple.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A release identity: `(major, minor, patch)`.
///
/// Serialized as its canonical string form (`"1.24.0"`) so downstream
/// stores receive plain data rather than a nested struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionId {
    /// Major component.
    pub major: u32,
    /// Minor component.
    pub minor: u32,
    /// Patch component (0 when the source string omitted it).
    pub patch: u32,
}

impl VersionId {
    /// Construct a version id from its components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string.
    ///
    /// Accepts `1.24.0`, `1.24`, `v1.24.0`, surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedVersion`] when the input does not have
    /// two or three dotted numeric components.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let trimmed = input.trim();
        let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);

        let malformed = || Error::MalformedVersion {
            input: input.to_string(),
        };

        let parts: Vec<&str> = bare.split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(malformed());
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| malformed())?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }

    /// The `major.minor` prefix, used e.g. to locate per-minor changelog
    /// documents.
    #[must_use]
    pub fn minor_series(self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for VersionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VersionId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VersionId> for String {
    fn from(v: VersionId) -> Self {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::VersionId;
    use crate::error::Error;

    #[test]
    fn parses_three_components() {
        assert_eq!(
            VersionId::parse("1.24.3").expect("valid"),
            VersionId::new(1, 24, 3)
        );
    }

    #[test]
    fn two_components_canonicalize_with_zero_patch() {
        assert_eq!(
            VersionId::parse("1.24").expect("valid"),
            VersionId::new(1, 24, 0)
        );
        assert_eq!(VersionId::parse("1.24").expect("valid").to_string(), "1.24.0");
    }

    #[test]
    fn leading_v_is_stripped() {
        assert_eq!(
            VersionId::parse("v1.20.0").expect("valid"),
            VersionId::new(1, 20, 0)
        );
    }

    #[test]
    fn rejects_single_component_and_garbage() {
        for input in ["1", "", "one.two", "1.x.3", "1.2.3.4"] {
            assert!(
                matches!(
                    VersionId::parse(input),
                    Err(Error::MalformedVersion { .. })
                ),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn ordering_is_lexicographic_on_the_triple() {
        let mut versions = [
            VersionId::new(1, 24, 0),
            VersionId::new(1, 2, 10),
            VersionId::new(1, 20, 5),
            VersionId::new(0, 99, 99),
        ];
        versions.sort();
        assert_eq!(
            versions,
            [
                VersionId::new(0, 99, 99),
                VersionId::new(1, 2, 10),
                VersionId::new(1, 20, 5),
                VersionId::new(1, 24, 0),
            ]
        );
    }

    #[test]
    fn serializes_to_canonical_string() {
        let json = serde_json::to_string(&VersionId::new(1, 22, 0)).expect("serialize");
        assert_eq!(json, "\"1.22.0\"");
        let back: VersionId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, VersionId::new(1, 22, 0));
    }
}
