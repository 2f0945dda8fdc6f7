//! Logging init: line-oriented progress and errors on stderr.
//!
//! The crawl reports each saved page and each skipped fetch as tracing
//! events, so stderr doubles as the user-visible progress log. Filtering
//! is controlled with `RUST_LOG` (default: info, debug for this crate).

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr. Call once, before the crawl starts.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mdmirror_core=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
