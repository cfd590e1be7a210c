//! GitHub access configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GithubConfig {
    /// Repository owner and name, e.g. `octocat/Hello-World`.
    #[serde(default)]
    pub repository: String,

    /// Access token for API and artifact requests.
    #[serde(default)]
    pub token: String,
}

impl GithubConfig {
    /// Check if the GitHub config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.repository.is_empty() && !self.token.is_empty()
    }
}
