//! Classify HTTP statuses and curl errors into retry policy error kinds.

use super::policy::ErrorKind;
use crate::fetch::FetchError;

/// Classify an HTTP status code for retry decisions. Success and client
/// errors are `Other` (never retried); the engine interprets them itself.
pub fn classify_status(status: u32) -> ErrorKind {
    match status {
        429 | 503 => ErrorKind::Throttled,
        500..=599 => ErrorKind::Http5xx(status as u16),
        _ => ErrorKind::Other,
    }
}

/// Classify a curl error for retry decisions.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

/// Classify a fetch transport error into an ErrorKind.
pub fn classify_fetch_error(e: &FetchError) -> ErrorKind {
    match e {
        FetchError::Curl(ce) => classify_curl_error(ce),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_429_and_503_throttled() {
        assert_eq!(classify_status(429), ErrorKind::Throttled);
        assert_eq!(classify_status(503), ErrorKind::Throttled);
    }

    #[test]
    fn status_5xx_retryable() {
        assert!(matches!(classify_status(500), ErrorKind::Http5xx(500)));
        assert!(matches!(classify_status(502), ErrorKind::Http5xx(502)));
    }

    #[test]
    fn status_2xx_and_4xx_other() {
        assert_eq!(classify_status(200), ErrorKind::Other);
        assert_eq!(classify_status(404), ErrorKind::Other);
        assert_eq!(classify_status(403), ErrorKind::Other);
    }
}
