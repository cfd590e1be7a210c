//! # skc-github
//!
//! GitHub API client for sketchcheck: authenticated transport with bounded
//! retry, a global rate-limit gate, Link-header pagination, and workflow
//! artifact retrieval into a scoped scratch directory.
//!
//! The client is deliberately sequential: one request is in flight at a
//! time, and every call is a plain await. There is no caching and no state
//! beyond the inner HTTP client and the credentials.

pub mod artifact;
pub mod pagination;

mod error;
mod http;
mod rate_limit;

pub use artifact::ReportSource;
pub use error::GithubError;
pub use http::default_retryable;
pub use pagination::{JsonPage, Pages};
pub use reqwest::Method;

use reqwest::header;
use serde_json::Value;

use crate::http::check_response;

// ── Types ──────────────────────────────────────────────────────────

/// A decoded HTTP response.
#[derive(Debug)]
pub struct ApiResponse {
    /// Response body decoded as UTF-8, lossily; API payloads are JSON text.
    pub body: String,
    pub headers: header::HeaderMap,
    /// URL the response was ultimately served from, after redirects.
    pub final_url: String,
}

/// An undecoded HTTP response, for binary payloads such as artifact
/// archives.
#[derive(Debug)]
pub struct RawResponse {
    pub body: Vec<u8>,
    pub headers: header::HeaderMap,
    pub final_url: String,
}

impl RawResponse {
    fn decode(self) -> ApiResponse {
        ApiResponse {
            body: String::from_utf8_lossy(&self.body).into_owned(),
            headers: self.headers,
            final_url: self.final_url,
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// Authenticated GitHub HTTP client.
pub struct GithubClient {
    http: reqwest::Client,
    repository: String,
    token: String,
}

impl GithubClient {
    /// Create a client for `repository` (`owner/name`) authenticating with
    /// `token`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(repository: &str, token: &str) -> Self {
        // GitHub asks API callers to identify themselves via User-Agent;
        // the repository owner serves as that identity.
        let owner = repository
            .split('/')
            .next()
            .filter(|owner| !owner.is_empty())
            .unwrap_or("sketchcheck");
        Self {
            http: reqwest::Client::builder()
                .user_agent(owner.to_string())
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client should build"),
            repository: repository.to_string(),
            token: token.to_string(),
        }
    }

    /// The `owner/name` this client was built for.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Issue `method` against `url` and return the decoded response.
    ///
    /// Applies the default retry policy ([`default_retryable`]) and, for API
    /// host URLs, the rate-limit gate.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError`] on a non-success status, when retries are
    /// exhausted, or with [`GithubError::RateLimitExhausted`] when the core
    /// quota is spent.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<ApiResponse, GithubError> {
        self.request_with_retry(method, url, body, default_retryable)
            .await
    }

    /// [`Self::request`] with a caller-supplied retryability predicate.
    ///
    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn request_with_retry<P>(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
        is_retryable: P,
    ) -> Result<ApiResponse, GithubError>
    where
        P: Fn(&GithubError) -> bool,
    {
        let raw = self
            .request_raw_with_retry(method, url, body, is_retryable)
            .await?;
        Ok(raw.decode())
    }

    /// Issue `method` against `url` and return the response undecoded.
    ///
    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn request_raw(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, GithubError> {
        self.request_raw_with_retry(method, url, body, default_retryable)
            .await
    }

    async fn request_raw_with_retry<P>(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
        is_retryable: P,
    ) -> Result<RawResponse, GithubError>
    where
        P: Fn(&GithubError) -> bool,
    {
        http::with_retries(url, is_retryable, || {
            self.attempt(&method, url, body.as_deref())
        })
        .await
    }

    /// One attempt: rate-limit gate (where applicable), then the request.
    async fn attempt(
        &self,
        method: &Method,
        url: &str,
        body: Option<&[u8]>,
    ) -> Result<RawResponse, GithubError> {
        if http::needs_quota_gate(url) {
            self.ensure_quota().await?;
        }
        self.send_once(method, url, body).await
    }

    /// Issue a single request with no gating and no retry. The primitive
    /// both the retry loop and the quota check itself build on.
    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        body: Option<&[u8]>,
    ) -> Result<RawResponse, GithubError> {
        tracing::debug!(%method, url, "opening URL");

        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(header::AUTHORIZATION, format!("token {}", self.token));
        if let Some(body) = body {
            builder = builder.body(body.to_vec());
        }

        let response = check_response(builder.send().await?).await?;
        let final_url = response.url().to_string();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            body,
            headers,
            final_url,
        })
    }

    /// GET `url` and parse the response as JSON, resolving pagination
    /// metadata from the `Link` header.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError`] on transport failure or a body that is not
    /// valid JSON.
    pub async fn api_json(&self, url: &str) -> Result<JsonPage, GithubError> {
        let response = self.request(Method::GET, url, None).await?;
        let json: Value = serde_json::from_str(&response.body)
            .map_err(|error| GithubError::Parse(error.to_string()))?;

        let page_count = if pagination::json_is_empty(&json) {
            // No HTTP error, but nothing came back (e.g. a listing endpoint
            // with no entries).
            0
        } else {
            pagination::page_count(link_header(&response.headers))
        };

        Ok(JsonPage {
            additional_pages: page_count > 1,
            page_count,
            json,
        })
    }
}

fn link_header(headers: &header::HeaderMap) -> Option<&str> {
    headers.get(header::LINK).and_then(|value| value.to_str().ok())
}
