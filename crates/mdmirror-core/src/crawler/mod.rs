//! Breadth-first crawl engine.
//!
//! Drains the frontier with a bounded pool of page workers: the coordinator
//! owns the frontier and the JoinSet, keeps up to `max_workers` pages in
//! flight, and folds each finished page's discovered links back through the
//! scope rules. Per page: save the Markdown variant, then expand by fetching
//! the HTML and extracting links. No fetch or write failure is fatal to the
//! crawl; only an unparseable start URL aborts.

mod page;
mod run;

pub use page::{PageOutcome, MARKDOWN_SUFFIX};
pub use run::{run_crawl, CrawlReport};
