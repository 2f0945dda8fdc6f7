//! Scope root: the normalized start URL and the link admission rules.

use anyhow::{Context, Result};
use url::Url;

use super::{normalize, NormalizedUrl};

/// The normalized start URL plus the pieces needed to resolve and admit
/// discovered hrefs. Immutable for the duration of a crawl.
///
/// Containment is a purely textual prefix check on normalized forms, matching
/// the mirrored sites' layout convention. A sibling path sharing the prefix
/// (`/docs2` under a `/docs` root) is admitted; see DESIGN.md.
#[derive(Debug, Clone)]
pub struct ScopeRoot {
    start: NormalizedUrl,
    /// `scheme://host[:port]`, used to resolve root-relative hrefs.
    origin: String,
    /// Start URL path with trailing slashes trimmed.
    path: String,
    /// Host with explicit port when present (e.g. `127.0.0.1:8080`).
    host: Option<String>,
}

impl ScopeRoot {
    /// Builds the scope from a raw start URL. Failure here is the only fatal
    /// startup error of a crawl: without a parseable start URL there is no
    /// frontier to seed.
    pub fn new(raw_start: &str) -> Result<Self> {
        let start = normalize(raw_start);
        let parsed = Url::parse(start.as_str())
            .with_context(|| format!("cannot parse start URL: {raw_start}"))?;

        let host = parsed.host_str().map(|h| match parsed.port() {
            Some(port) => format!("{h}:{port}"),
            None => h.to_string(),
        });
        let origin = parsed.origin().ascii_serialization();
        let path = parsed.path().trim_end_matches('/').to_string();

        Ok(Self {
            start,
            origin,
            path,
            host,
        })
    }

    /// The normalized start URL (also the frontier seed).
    pub fn start(&self) -> &NormalizedUrl {
        &self.start
    }

    pub fn as_str(&self) -> &str {
        self.start.as_str()
    }

    /// Start URL path component, trailing slashes trimmed.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Host (with explicit port) of the start URL, if it has one.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Resolves a raw href from a page into an absolute normalized URL.
    ///
    /// Root-relative hrefs (`/...`) resolve against the start URL's origin.
    /// Hrefs that are not absolute `http(s)` URLs are discarded: page-relative
    /// links and other schemes (`mailto:`, `javascript:`, ...) are out of
    /// scope by policy.
    pub fn resolve(&self, href: &str) -> Option<NormalizedUrl> {
        if href.starts_with('/') {
            return Some(normalize(&format!("{}{}", self.origin, href)));
        }
        if href.starts_with("http") {
            return Some(normalize(href));
        }
        None
    }

    /// True if `url` lies inside the crawl subtree (textual prefix check).
    pub fn contains(&self, url: &NormalizedUrl) -> bool {
        url.as_str().starts_with(self.start.as_str())
    }

    /// Resolve + containment in one step: the candidate to feed the frontier,
    /// or `None` when the href is out of scope.
    pub fn admit(&self, href: &str) -> Option<NormalizedUrl> {
        let resolved = self.resolve(href)?;
        if self.contains(&resolved) {
            Some(resolved)
        } else {
            None
        }
    }
}
