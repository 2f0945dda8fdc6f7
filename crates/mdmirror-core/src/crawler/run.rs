//! Crawl coordinator: frontier-driven worker pool.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::config::MirrorConfig;
use crate::control::StopFlag;
use crate::fetch::Fetcher;
use crate::frontier::Frontier;
use crate::storage::PageStore;
use crate::url_model::{self, ScopeRoot};

use super::page::{process_page, PageOutcome};

/// Summary of a finished (or stopped) crawl.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrawlReport {
    /// Pages processed (each normalized URL at most once).
    pub pages: usize,
    /// Markdown files written.
    pub saved: usize,
    /// True when the crawl ended because of a stop request rather than a
    /// drained queue.
    pub stopped: bool,
}

/// Crawls the subtree rooted at `start_url`, mirroring Markdown variants
/// under `output_root`.
///
/// Keeps up to `cfg.max_workers` pages in flight at once; `max_workers = 1`
/// gives strictly sequential breadth-first order. The frontier is owned by
/// this task alone, so each URL is admitted and fetched at most once
/// regardless of the concurrency degree. Individual page failures never
/// abort the crawl; the only error path is a start URL that cannot form a
/// scope.
pub async fn run_crawl(
    fetcher: Arc<dyn Fetcher>,
    store: Arc<dyn PageStore>,
    start_url: &str,
    output_root: &Path,
    cfg: &MirrorConfig,
    stop: StopFlag,
) -> Result<CrawlReport> {
    let scope = Arc::new(ScopeRoot::new(start_url)?);
    let base_dir = Arc::new(url_model::base_directory(output_root, &scope));
    tracing::info!("starting crawl from {}", scope.as_str());
    tracing::info!("output directory: {}", base_dir.display());

    let max_workers = cfg.max_workers.max(1);
    let mut frontier = Frontier::seeded(scope.start().clone());
    let mut report = CrawlReport::default();
    let mut join_set: JoinSet<PageOutcome> = JoinSet::new();

    loop {
        // Fill the pool from the queue; a stop request halts dispatch but
        // lets in-flight pages finish.
        while join_set.len() < max_workers && !stop.is_set() {
            let Some(url) = frontier.next() else { break };
            let fetcher = Arc::clone(&fetcher);
            let store = Arc::clone(&store);
            let scope = Arc::clone(&scope);
            let base_dir = Arc::clone(&base_dir);
            join_set.spawn_blocking(move || {
                process_page(fetcher.as_ref(), store.as_ref(), &url, &scope, &base_dir)
            });
        }

        if join_set.is_empty() {
            break;
        }

        let Some(res) = join_set.join_next().await else {
            break;
        };
        let outcome = res.map_err(|e| anyhow::anyhow!("page task join: {}", e))?;

        report.pages += 1;
        if outcome.saved {
            report.saved += 1;
        }
        for href in &outcome.links {
            if let Some(candidate) = scope.admit(href) {
                frontier.admit(candidate);
            }
        }
        tracing::debug!(
            pending = frontier.pending(),
            in_flight = join_set.len(),
            "finished {}",
            outcome.url
        );
    }

    report.stopped = stop.is_set();
    Ok(report)
}
