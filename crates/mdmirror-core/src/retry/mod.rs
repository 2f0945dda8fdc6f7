//! Retry and backoff policy for page fetches.
//!
//! Encapsulates error classification (timeouts, throttling, connection
//! failures, retryable HTTP statuses) and exponential backoff decisions so
//! the fetcher applies one consistent policy. The traversal layer never
//! retries: a visited URL is fetched at most once, with retries confined to
//! the attempts of that single fetch.

mod classify;
mod policy;
mod run;

pub use classify::{classify_curl_error, classify_fetch_error, classify_status};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::fetch_with_retry;
