//! Retry loop: run a fetch until it settles or the policy says stop.

use super::classify;
use super::policy::{RetryDecision, RetryPolicy};
use crate::fetch::{FetchError, FetchResponse};

/// Runs a fetch closure until it yields a non-retryable outcome or the policy
/// gives up. Retryable outcomes are transport errors classified as transient
/// and throttling/5xx statuses; the last outcome (success or not) is returned
/// as-is so the caller sees the final status.
pub fn fetch_with_retry<F>(policy: &RetryPolicy, mut f: F) -> Result<FetchResponse, FetchError>
where
    F: FnMut() -> Result<FetchResponse, FetchError>,
{
    let mut attempt = 1u32;
    loop {
        let outcome = f();
        let kind = match &outcome {
            Ok(resp) => classify::classify_status(resp.status),
            Err(e) => classify::classify_fetch_error(e),
        };
        match policy.decide(attempt, kind) {
            RetryDecision::NoRetry => return outcome,
            RetryDecision::RetryAfter(delay) => {
                tracing::debug!(attempt, delay_ms = delay.as_millis() as u64, "retrying fetch");
                std::thread::sleep(delay);
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
        }
    }

    fn resp(status: u32) -> FetchResponse {
        FetchResponse { status, body: vec![] }
    }

    #[test]
    fn success_returns_immediately() {
        let mut calls = 0;
        let out = fetch_with_retry(&fast_policy(5), || {
            calls += 1;
            Ok(resp(200))
        })
        .unwrap();
        assert_eq!(out.status, 200);
        assert_eq!(calls, 1);
    }

    #[test]
    fn not_found_is_not_retried() {
        let mut calls = 0;
        let out = fetch_with_retry(&fast_policy(5), || {
            calls += 1;
            Ok(resp(404))
        })
        .unwrap();
        assert_eq!(out.status, 404);
        assert_eq!(calls, 1);
    }

    #[test]
    fn throttled_then_success() {
        let mut calls = 0;
        let out = fetch_with_retry(&fast_policy(5), || {
            calls += 1;
            if calls < 3 {
                Ok(resp(503))
            } else {
                Ok(resp(200))
            }
        })
        .unwrap();
        assert_eq!(out.status, 200);
        assert_eq!(calls, 3);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let mut calls = 0;
        let out = fetch_with_retry(&fast_policy(3), || {
            calls += 1;
            Ok(resp(500))
        })
        .unwrap();
        assert_eq!(out.status, 500);
        assert_eq!(calls, 3);
    }
}
