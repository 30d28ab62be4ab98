//! Changelog fetch collaborator.
//!
//! Fetching is best-effort by contract: a source that cannot be
//! retrieved is "no data for this source", never a fatal error — the
//! analysis proceeds with whatever sources succeeded. Only the caller
//! decides that zero surviving sources is fatal.

use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;
use tracing::{info, warn};

use relnav_core::version::VersionId;

/// HTTP timeout per changelog document.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Supported tools. Only Kubernetes publishes changelogs at a URL we
/// can derive from a version; the others rely on `--changelog-file`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Kubernetes,
    Terraform,
    Docker,
}

impl Tool {
    /// Lowercase display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kubernetes => "kubernetes",
            Self::Terraform => "terraform",
            Self::Docker => "docker",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Derive the changelog document URL for `version`, when the tool has
/// a known URL scheme.
///
/// Kubernetes publishes one document per minor series, so `1.24.2`
/// maps to `CHANGELOG-1.24.md`.
#[must_use]
pub fn changelog_url(tool: Tool, version: VersionId) -> Option<String> {
    match tool {
        Tool::Kubernetes => Some(format!(
            "https://raw.githubusercontent.com/kubernetes/kubernetes/master/CHANGELOG/CHANGELOG-{}.md",
            version.minor_series()
        )),
        Tool::Terraform | Tool::Docker => None,
    }
}

/// Fetch the changelog document covering `version`.
///
/// Returns `None` when the tool has no URL scheme, the request fails,
/// or the body cannot be read; each case is logged and the analysis
/// continues with the remaining sources.
#[must_use]
pub fn fetch_changelog(tool: Tool, version: VersionId) -> Option<String> {
    let url = changelog_url(tool, version)?;
    let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();

    match agent.get(&url).call() {
        Ok(response) => match response.into_string() {
            Ok(body) => {
                info!(%url, bytes = body.len(), "fetched changelog");
                Some(body)
            }
            Err(err) => {
                warn!(%url, error = %err, "failed reading changelog body");
                None
            }
        },
        Err(err) => {
            warn!(%url, error = %err, "changelog source unavailable");
            None
        }
    }
}
