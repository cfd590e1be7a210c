//! Rate-limit gate for the GitHub core API.
//!
//! Every API request (other than the status query itself) first checks the
//! remaining core quota. Exhaustion is not a failure: it surfaces as
//! [`GithubError::RateLimitExhausted`], which the orchestrator turns into a
//! graceful zero-status exit so the calling pipeline is not marked red.

use serde::Deserialize;

use crate::error::GithubError;
use crate::http::RATE_LIMIT_URL;
use crate::{GithubClient, Method};

#[derive(Debug, Deserialize)]
pub(crate) struct RateLimitStatus {
    resources: Resources,
}

#[derive(Debug, Deserialize)]
struct Resources {
    core: Window,
}

/// One rate-limit window as reported by the API.
#[derive(Debug, Deserialize)]
pub(crate) struct Window {
    pub(crate) limit: u64,
    pub(crate) remaining: u64,
    pub(crate) reset: u64,
}

impl RateLimitStatus {
    /// The core window governs every endpoint this client uses; the search
    /// API keeps a separate counter that is irrelevant here.
    pub(crate) const fn core(&self) -> &Window {
        &self.resources.core
    }
}

impl Window {
    pub(crate) const fn exhausted(&self) -> bool {
        self.remaining == 0
    }
}

impl GithubClient {
    /// Fail with [`GithubError::RateLimitExhausted`] when the core quota is
    /// spent.
    ///
    /// Goes through the ungated request primitive: the status endpoint is
    /// not itself subject to rate limiting, and gating it would recurse.
    pub(crate) async fn ensure_quota(&self) -> Result<(), GithubError> {
        let method = Method::GET;
        let raw = crate::http::with_retries(RATE_LIMIT_URL, crate::default_retryable, || {
            self.send_once(&method, RATE_LIMIT_URL, None)
        })
        .await?;

        let body = String::from_utf8_lossy(&raw.body);
        let status: RateLimitStatus = serde_json::from_str(&body)
            .map_err(|error| GithubError::Parse(error.to_string()))?;

        let core = status.core();
        tracing::debug!(
            limit = core.limit,
            remaining = core.remaining,
            reset = core.reset,
            "GitHub core API quota"
        );

        if core.exhausted() {
            return Err(GithubError::RateLimitExhausted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::RateLimitStatus;

    const FIXTURE: &str = r#"{
        "resources": {
            "core": {"limit": 5000, "remaining": 4993, "reset": 1372700873},
            "search": {"limit": 30, "remaining": 18, "reset": 1372697452}
        },
        "rate": {"limit": 5000, "remaining": 4993, "reset": 1372700873}
    }"#;

    #[test]
    fn parses_the_core_window() {
        let status: RateLimitStatus = serde_json::from_str(FIXTURE).unwrap();
        let core = status.core();
        assert_eq!(core.limit, 5000);
        assert_eq!(core.remaining, 4993);
        assert_eq!(core.reset, 1_372_700_873);
        assert!(!core.exhausted());
    }

    #[test]
    fn zero_remaining_is_exhausted() {
        let body = r#"{"resources": {"core": {"limit": 5000, "remaining": 0, "reset": 1372700873}}}"#;
        let status: RateLimitStatus = serde_json::from_str(body).unwrap();
        assert!(status.core().exhausted());
    }
}
