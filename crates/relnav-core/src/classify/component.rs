//! Component-name extraction from change lines.
//!
//! Best-effort structural matching: a small ordered list of patterns
//! that tend to name the thing a change affects. The first match from
//! the first pattern wins; many lines legitimately yield nothing.

use std::sync::LazyLock;

use regex::Regex;

/// Structural-name patterns, in priority order:
///
/// 1. CamelCase identifier ending in a known suffix
///    (`PodSecurityPolicy`, `IngressController`, `MetricsAPI`).
/// 2. API group/version token (`batch/v1beta1`, `apps/v1`).
/// 3. Hyphenated lowercase identifier (`kube-proxy`, `containerd-shim`).
const PATTERN_SOURCES: [&str; 3] = [
    r"\b([A-Z][a-zA-Z]+(?:API|Policy|Controller|Manager))\b",
    r"\b([a-z][a-z0-9.]*/v[a-zA-Z0-9]+)\b",
    r"\b([a-z]+(?:-[a-z]+)+)\b",
];

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PATTERN_SOURCES
        .iter()
        .map(|source| Regex::new(source).expect("component pattern is valid"))
        .collect()
});

/// Extract an affected-component label from a change line.
///
/// Returns the first capture of the first pattern that matches anywhere
/// in `line`, or `None` when no pattern matches.
#[must_use]
pub fn extract_component(line: &str) -> Option<String> {
    PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::extract_component;

    #[test]
    fn camel_case_suffix_identifiers_win_first() {
        assert_eq!(
            extract_component("PodSecurityPolicy is deprecated").as_deref(),
            Some("PodSecurityPolicy")
        );
        assert_eq!(
            extract_component("the kube-proxy IngressController changed").as_deref(),
            Some("IngressController")
        );
    }

    #[test]
    fn api_group_version_tokens() {
        assert_eq!(
            extract_component("CronJob batch/v1beta1 API removed; users should migrate").as_deref(),
            Some("batch/v1beta1")
        );
        assert_eq!(
            extract_component("apps/v1 Deployment defaults changed").as_deref(),
            Some("apps/v1")
        );
    }

    #[test]
    fn hyphenated_identifiers_are_the_last_resort() {
        assert_eq!(
            extract_component("kube-proxy now handles IPv6").as_deref(),
            Some("kube-proxy")
        );
    }

    #[test]
    fn plain_prose_yields_nothing() {
        assert_eq!(extract_component("Improved performance in several areas"), None);
    }
}
