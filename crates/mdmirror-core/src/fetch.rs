//! HTTP page fetching.
//!
//! Uses the curl crate (libcurl) for plain GET requests with redirects
//! followed and connect/total timeouts applied. Blocking; the crawl engine
//! calls it through `spawn_blocking`.

use std::time::Duration;
use thiserror::Error;

use crate::config::MirrorConfig;
use crate::retry::{fetch_with_retry, RetryPolicy};

/// Transport-level fetch failure. Non-2xx statuses are not errors; they come
/// back inside [`FetchResponse`] so the engine can decide per step.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, DNS, ...).
    #[error(transparent)]
    Curl(#[from] curl::Error),
}

/// Response to a single GET: status code and raw body bytes.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetch port of the crawl engine. Production uses [`HttpFetcher`]; tests
/// inject fakes with canned responses.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

/// Curl-backed fetcher with retry/backoff for transient failures.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: String,
    policy: RetryPolicy,
}

impl HttpFetcher {
    pub fn from_config(cfg: &MirrorConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.fetch_timeout_secs),
            user_agent: cfg.user_agent.clone(),
            policy: RetryPolicy::from_config(cfg.retry.as_ref()),
        }
    }

    /// One GET, no retries. Runs in the current thread; call from
    /// `spawn_blocking` when used from async code.
    fn get_once(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(FetchResponse { status, body })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        fetch_with_retry(&self.policy, || self.get_once(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_2xx_only() {
        let ok = FetchResponse { status: 200, body: vec![] };
        let no_content = FetchResponse { status: 204, body: vec![] };
        let missing = FetchResponse { status: 404, body: vec![] };
        let redirect = FetchResponse { status: 301, body: vec![] };
        assert!(ok.is_success());
        assert!(no_content.is_success());
        assert!(!missing.is_success());
        assert!(!redirect.is_success());
    }
}
