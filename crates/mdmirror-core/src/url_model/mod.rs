//! URL modeling: normalization, scope rules, and local path derivation.
//!
//! Two URLs are the same page iff their normalized forms are byte-equal.
//! Normalization is deliberately shallow: it strips the fragment and any
//! trailing slashes, nothing else. `..` segments, host case, and query
//! strings are left alone, so a link differing only by query string is a
//! distinct page.

mod layout;
mod sanitize;
mod scope;

pub use layout::{base_directory, relative_path};
pub use sanitize::{sanitize_segment, FALLBACK_SEGMENT};
pub use scope::ScopeRoot;

use std::fmt;

/// A URL with no fragment component and no trailing slash. Immutable once
/// produced; the frontier and scope rules compare these byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes a raw URL string: drops everything from the first `#` onward,
/// then strips trailing `/` characters. Total over any string input.
pub fn normalize(raw: &str) -> NormalizedUrl {
    let without_fragment = raw.split('#').next().unwrap_or(raw);
    NormalizedUrl(without_fragment.trim_end_matches('/').to_string())
}
