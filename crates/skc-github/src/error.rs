//! GitHub client error types.

use thiserror::Error;

/// Errors that can occur when talking to GitHub.
#[derive(Debug, Error)]
pub enum GithubError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Transient transport failures persisted through every retry.
    #[error("request retries exhausted for {url}")]
    RetriesExhausted { url: String },

    /// The core API request quota is spent. Not a failure: callers treat
    /// this as "nothing to do right now" and exit cleanly.
    #[error("GitHub API request quota has been reached")]
    RateLimitExhausted,

    /// Artifact download or extraction failed.
    #[error("artifact error: {0}")]
    Artifact(String),

    /// Failed to parse an API response.
    #[error("parse error: {0}")]
    Parse(String),
}
