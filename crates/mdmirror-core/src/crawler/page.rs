//! Processing of a single page: save its Markdown variant, then discover links.

use std::path::Path;

use crate::fetch::Fetcher;
use crate::links;
use crate::storage::PageStore;
use crate::url_model::{self, NormalizedUrl, ScopeRoot};

/// Suffix of the Markdown variant GitBook-style sites expose next to each
/// HTML page, and of the files written to the mirror.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// What one page contributed to the crawl.
#[derive(Debug)]
pub struct PageOutcome {
    pub url: NormalizedUrl,
    /// True when the Markdown variant existed and was written to disk.
    pub saved: bool,
    /// Raw hrefs found on the HTML page, in document order. Not yet resolved
    /// or scoped; the coordinator admits them against the frontier.
    pub links: Vec<String>,
}

/// Runs the save and expand steps for one URL. Blocking (fetches and disk
/// writes); the coordinator calls this via `spawn_blocking`. Failures in
/// either step are logged and absorbed: the page still counts as visited.
pub(crate) fn process_page(
    fetcher: &dyn Fetcher,
    store: &dyn PageStore,
    url: &NormalizedUrl,
    scope: &ScopeRoot,
    base_dir: &Path,
) -> PageOutcome {
    let saved = save_markdown(fetcher, store, url, scope, base_dir);
    let links = discover_links(fetcher, url);
    PageOutcome {
        url: url.clone(),
        saved,
        links,
    }
}

/// Fetches `<url>.md` and writes it under the base directory. A non-2xx
/// response just means the page has no Markdown artifact.
fn save_markdown(
    fetcher: &dyn Fetcher,
    store: &dyn PageStore,
    url: &NormalizedUrl,
    scope: &ScopeRoot,
    base_dir: &Path,
) -> bool {
    let md_url = format!("{url}{MARKDOWN_SUFFIX}");
    match fetcher.fetch(&md_url) {
        Ok(resp) if resp.is_success() => {
            let rel = url_model::relative_path(url, scope);
            let target = base_dir.join(format!("{rel}{MARKDOWN_SUFFIX}"));
            match store.write(&target, &resp.body) {
                Ok(()) => {
                    tracing::info!("saved {}", target.display());
                    true
                }
                Err(e) => {
                    tracing::warn!("failed to save {}: {:#}", target.display(), e);
                    false
                }
            }
        }
        Ok(resp) => {
            tracing::debug!("no markdown for {} (HTTP {})", url, resp.status);
            false
        }
        Err(e) => {
            tracing::warn!("markdown fetch failed for {}: {}", url, e);
            false
        }
    }
}

/// Fetches the HTML page and returns its hrefs. A failed or non-success
/// fetch means no links are discovered from this page; the crawl continues.
fn discover_links(fetcher: &dyn Fetcher, url: &NormalizedUrl) -> Vec<String> {
    match fetcher.fetch(url.as_str()) {
        Ok(resp) if resp.is_success() => {
            links::extract_links(&String::from_utf8_lossy(&resp.body))
        }
        Ok(resp) => {
            tracing::debug!("skipping expansion of {} (HTTP {})", url, resp.status);
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("page fetch failed for {}: {}", url, e);
            Vec::new()
        }
    }
}
