//! Crawl frontier: visited set plus FIFO queue.
//!
//! Owned exclusively by the crawl coordinator; all mutation goes through
//! these methods. `admit` is the single point where a URL enters the crawl,
//! and it inserts into the visited set and the queue together, so no URL can
//! ever be queued (and therefore fetched) twice. The visited set only grows.

use std::collections::{HashSet, VecDeque};

use crate::url_model::NormalizedUrl;

#[derive(Debug)]
pub struct Frontier {
    visited: HashSet<NormalizedUrl>,
    queue: VecDeque<NormalizedUrl>,
}

impl Frontier {
    /// Frontier seeded with the start URL in both the queue and visited set.
    pub fn seeded(start: NormalizedUrl) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        let mut queue = VecDeque::new();
        queue.push_back(start);
        Self { visited, queue }
    }

    /// Admits a URL: appended to the queue iff never seen before.
    /// Returns true when the URL was new.
    pub fn admit(&mut self, url: NormalizedUrl) -> bool {
        if self.visited.insert(url.clone()) {
            self.queue.push_back(url);
            true
        } else {
            false
        }
    }

    /// Pops the next URL in FIFO order, or `None` when the queue is drained.
    pub fn next(&mut self) -> Option<NormalizedUrl> {
        self.queue.pop_front()
    }

    /// URLs admitted so far (queued, in flight, or done).
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// URLs still waiting in the queue.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
