//! Shared HTTP helpers: status-code checks, the bounded retry loop, and the
//! rate-limit gate predicate.

use std::future::Future;

use crate::error::GithubError;

/// One initial attempt plus three retries.
pub(crate) const MAX_ATTEMPTS: usize = 4;

pub(crate) const API_BASE: &str = "https://api.github.com";
pub(crate) const RATE_LIMIT_URL: &str = "https://api.github.com/rate_limit";

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success; otherwise maps it to
/// [`GithubError::Api`] with the status code and response body.
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, GithubError> {
    if !resp.status().is_success() {
        return Err(GithubError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Default retryability: transient network failures and upstream 5xx
/// responses. Request-construction errors (e.g. a malformed URL) are fatal,
/// as is everything that is not transport-level.
#[must_use]
pub fn default_retryable(error: &GithubError) -> bool {
    match error {
        GithubError::Http(error) => error.is_timeout() || error.is_connect(),
        GithubError::Api { status, .. } => matches!(status, 500 | 502 | 503 | 504),
        _ => false,
    }
}

/// Whether `url` must pass the rate-limit gate before being requested.
///
/// The rate-limit status endpoint is exempt (it is itself not subject to
/// rate limiting), as is anything outside the API host, e.g. an archive
/// download URL.
pub(crate) fn needs_quota_gate(url: &str) -> bool {
    url.starts_with(API_BASE) && !url.starts_with(RATE_LIMIT_URL)
}

/// Run `operation` up to [`MAX_ATTEMPTS`] times, retrying failures the
/// predicate classifies as transient. Non-retryable failures propagate
/// immediately; exhausting every attempt yields
/// [`GithubError::RetriesExhausted`].
pub(crate) async fn with_retries<T, F, Fut, P>(
    url: &str,
    is_retryable: P,
    mut operation: F,
) -> Result<T, GithubError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GithubError>>,
    P: Fn(&GithubError) -> bool,
{
    for attempt in 1..=MAX_ATTEMPTS {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if is_retryable(&error) => {
                tracing::warn!(%error, attempt, url, "transient transport failure");
            }
            Err(error) => return Err(error),
        }
    }
    Err(GithubError::RetriesExhausted {
        url: url.to_string(),
    })
}
