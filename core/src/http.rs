//! HTTP verb and URL plumbing for the request executor.
//!
//! # Design
//! The API uses exactly two verbs, so `Method` is a closed enum rather than
//! a free-form string. `join_url` is the one place path arithmetic happens:
//! endpoints resolve against the base address, and the optional suffix joins
//! as exactly one extra path segment regardless of stray slashes on either
//! side. Keeping it a pure function makes the slash edge cases unit-testable
//! without a network.

/// HTTP method for an API request. The executor supports exactly these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Resolve `endpoint` against `base_url` and append `suffix` as one path
/// segment.
///
/// An empty suffix is a no-op. Trailing slashes on the base or endpoint and
/// leading slashes on the suffix are normalized so the result never contains
/// a double slash.
pub(crate) fn join_url(base_url: &str, endpoint: &str, suffix: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let endpoint = endpoint.trim_matches('/');
    let suffix = suffix.trim_matches('/');

    if suffix.is_empty() {
        format!("{base}/{endpoint}")
    } else {
        format!("{base}/{endpoint}/{suffix}")
    }
}
