//! Crawl cancellation: a shared stop flag checked by the coordinator.
//!
//! The CLI sets the flag from its Ctrl-C handler. The coordinator checks it
//! before dispatching each page, so no new fetches start after a stop request;
//! pages already in flight finish and their writes stay atomic.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable stop signal shared between the signal handler and the crawl loop.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop. Dispatch of new pages halts; in-flight pages complete.
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// True once a stop has been requested.
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
