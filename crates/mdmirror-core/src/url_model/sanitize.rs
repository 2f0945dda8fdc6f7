//! Filesystem-safe sanitization of URL-derived path segments.

use percent_encoding::percent_decode_str;

/// Segment used when sanitization leaves nothing usable (or when a start URL
/// yields no host and no path segments at all).
pub const FALLBACK_SEGMENT: &str = "root";

/// Sanitizes one URL segment for use as a directory or file name.
///
/// Percent-decodes first so encoded names stay readable, then keeps
/// alphanumerics and `-`, `.`, `_`; everything else (including `/` and `\`)
/// becomes `_`. An empty result falls back to [`FALLBACK_SEGMENT`].
pub fn sanitize_segment(segment: &str) -> String {
    let decoded = percent_decode_str(segment.trim()).decode_utf8_lossy();
    let sanitized: String = decoded
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '.' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() {
        FALLBACK_SEGMENT.to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_safe_characters() {
        assert_eq!(sanitize_segment("docs-v1.2_beta"), "docs-v1.2_beta");
        assert_eq!(sanitize_segment("d.com"), "d.com");
    }

    #[test]
    fn replaces_separators_and_punctuation() {
        assert_eq!(sanitize_segment("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_segment("127.0.0.1:8080"), "127.0.0.1_8080");
        assert_eq!(sanitize_segment("hello world!"), "hello_world_");
    }

    #[test]
    fn percent_decodes_before_mapping() {
        assert_eq!(sanitize_segment("getting%20started"), "getting_started");
        assert_eq!(sanitize_segment("caf%C3%A9"), "café");
    }

    #[test]
    fn empty_falls_back() {
        assert_eq!(sanitize_segment(""), FALLBACK_SEGMENT);
        assert_eq!(sanitize_segment("   "), FALLBACK_SEGMENT);
    }
}
