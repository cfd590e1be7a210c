//! Expected-database location configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Where the expected-outcomes database lives. Three spellings are
    /// accepted: a local directory path, an `http(s)://` archive URL, or
    /// `artifact:<name>` naming a workflow artifact to look up via the API.
    #[serde(default)]
    pub source: String,
}

/// A parsed [`DatabaseConfig::source`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseSource {
    /// Existing directory on disk.
    Local(PathBuf),
    /// Direct zip archive URL.
    Url(String),
    /// Workflow artifact name, resolved through the artifacts API.
    Artifact(String),
}

impl DatabaseConfig {
    /// Check if a database source was supplied.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.source.is_empty()
    }

    /// Classify the configured source.
    #[must_use]
    pub fn database_source(&self) -> DatabaseSource {
        if let Some(name) = self.source.strip_prefix("artifact:") {
            DatabaseSource::Artifact(name.to_string())
        } else if self.source.starts_with("http://") || self.source.starts_with("https://") {
            DatabaseSource::Url(self.source.clone())
        } else {
            DatabaseSource::Local(PathBuf::from(&self.source))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::{DatabaseConfig, DatabaseSource};

    #[test]
    fn default_is_not_configured() {
        assert!(!DatabaseConfig::default().is_configured());
    }

    #[test]
    fn url_sources_are_recognized() {
        let config = DatabaseConfig {
            source: "https://example.com/database.zip".into(),
        };
        assert_eq!(
            config.database_source(),
            DatabaseSource::Url("https://example.com/database.zip".into())
        );
    }

    #[test]
    fn artifact_sources_strip_the_prefix() {
        let config = DatabaseConfig {
            source: "artifact:expected-results".into(),
        };
        assert_eq!(
            config.database_source(),
            DatabaseSource::Artifact("expected-results".into())
        );
    }

    #[test]
    fn everything_else_is_a_local_path() {
        let config = DatabaseConfig {
            source: "ci/expected-database".into(),
        };
        assert_eq!(
            config.database_source(),
            DatabaseSource::Local(PathBuf::from("ci/expected-database"))
        );
    }
}
