//! CLI for the mdmirror documentation mirror.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use mdmirror_core::config;
use mdmirror_core::control::StopFlag;
use mdmirror_core::crawler;
use mdmirror_core::fetch::{Fetcher, HttpFetcher};
use mdmirror_core::storage::{FsStore, PageStore};

/// Recursively download GitBook-style documentation as Markdown.
#[derive(Debug, Parser)]
#[command(name = "mdmirror")]
#[command(about = "Mirror a documentation tree as Markdown files", long_about = None)]
pub struct Cli {
    /// The URL to start crawling from (e.g. https://docs.example.com/section).
    pub url: String,

    /// Output directory for downloaded files.
    #[arg(short, long, default_value = "docs")]
    pub output: PathBuf,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Load global config early; it drives worker count, timeouts, and
        // the retry policy of the fetcher.
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::from_config(&cfg));
        let store: Arc<dyn PageStore> = Arc::new(FsStore);

        let stop = StopFlag::new();
        {
            let stop = stop.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("stop requested; letting in-flight pages finish");
                    stop.request_stop();
                }
            });
        }

        let report =
            crawler::run_crawl(fetcher, store, &cli.url, &cli.output, &cfg, stop).await?;

        if report.stopped {
            println!(
                "crawl stopped early: {} page(s) visited, {} markdown file(s) saved",
                report.pages, report.saved
            );
        } else {
            println!(
                "crawl complete: {} page(s) visited, {} markdown file(s) saved",
                report.pages, report.saved
            );
        }
        Ok(())
    }
}
