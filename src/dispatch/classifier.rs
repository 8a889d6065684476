// SPDX-License-Identifier: MPL-2.0

//! Scan payload classification
//!
//! Decides whether a decoded payload is a strict URL, a custom scheme, or
//! plain text. Classification is a pure, total function: every string gets
//! exactly one bucket and the same string always gets the same bucket.

use crate::constants::schemes;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Generic scheme shape: `letter (letter|digit|+|.|-)* "://" anything`,
/// plus the bare schemes that omit the authority part.
static SCHEME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z][a-zA-Z0-9+.-]*://.+|magnet:\?.+|mailto:.+|tel:.+|geo:.+)$")
        .expect("scheme pattern is valid")
});

/// Bucket assigned to a scan payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Strict URL (web-ish scheme with authority)
    Url,
    /// Custom scheme link (anything link-shaped that is not a strict URL)
    Scheme,
    /// Plain text
    Text,
}

impl Classification {
    /// True for anything that produces a launch request
    pub fn is_link(&self) -> bool {
        !matches!(self, Classification::Text)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Url => write!(f, "URL"),
            Classification::Scheme => write!(f, "SCHEME"),
            Classification::Text => write!(f, "TEXT"),
        }
    }
}

/// Classify a raw decoded payload
pub fn classify(payload: &str) -> Classification {
    if is_strict_url(payload) {
        return Classification::Url;
    }
    if SCHEME_PATTERN.is_match(payload) {
        return Classification::Scheme;
    }
    Classification::Text
}

/// Strict URL validation: parseable, authority present, web-ish scheme
fn is_strict_url(payload: &str) -> bool {
    let Ok(parsed) = Url::parse(payload) else {
        return false;
    };
    if !schemes::URL_SCHEMES.contains(&parsed.scheme()) {
        return false;
    }
    // file: URLs have no host but still carry an authority marker
    parsed.has_host() || parsed.scheme() == "file"
}

/// Extract the scheme prefix from a link-shaped payload
///
/// Returns `None` for payloads with no scheme-like prefix.
pub fn scheme_of(payload: &str) -> Option<&str> {
    let (scheme, _) = payload.split_once(':')?;
    if scheme.is_empty() {
        return None;
    }
    let mut chars = scheme.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-')) {
        Some(scheme)
    } else {
        None
    }
}
