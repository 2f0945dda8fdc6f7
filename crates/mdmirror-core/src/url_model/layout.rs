//! Mapping from crawl scope and page URLs to the local mirror layout.
//!
//! The mirror is rooted in a directory tree derived from the start URL's
//! host and path segments, and each page maps to one relative file path
//! under it. The section index page maps to `README` (GitBook convention).

use std::path::{Path, PathBuf};
use url::Url;

use super::sanitize::{sanitize_segment, FALLBACK_SEGMENT};
use super::scope::ScopeRoot;
use super::NormalizedUrl;

/// Derives the base output directory for a crawl: `output_root` joined with
/// the sanitized host and each non-empty start-path segment as nested
/// subdirectories. A start URL with no host and no path segments falls back
/// to a single `root` segment.
pub fn base_directory(output_root: &Path, scope: &ScopeRoot) -> PathBuf {
    let mut segments: Vec<&str> = Vec::new();
    if let Some(host) = scope.host() {
        segments.push(host);
    }
    segments.extend(scope.path().split('/').filter(|s| !s.is_empty()));

    if segments.is_empty() {
        return output_root.join(FALLBACK_SEGMENT);
    }

    segments
        .iter()
        .fold(output_root.to_path_buf(), |dir, seg| {
            dir.join(sanitize_segment(seg))
        })
}

/// Derives the relative file path (without the `.md` suffix) for a page.
///
/// The page whose path equals the start path is the section index and maps
/// to `README`. Pages below the start path map to the remainder after the
/// prefix. The final arm is a defensive fallback; the scope rules keep
/// out-of-subtree URLs from reaching this point.
pub fn relative_path(url: &NormalizedUrl, scope: &ScopeRoot) -> String {
    let url_path = match Url::parse(url.as_str()) {
        Ok(parsed) => parsed.path().trim_end_matches('/').to_string(),
        Err(_) => return url.as_str().trim_start_matches('/').to_string(),
    };
    let start_path = scope.path();

    if url_path == start_path {
        return "README".to_string();
    }
    if let Some(rest) = url_path.strip_prefix(start_path) {
        return rest.trim_start_matches('/').to_string();
    }
    url_path.trim_start_matches('/').to_string()
}
