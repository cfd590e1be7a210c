//! # skc-config
//!
//! Layered configuration loading for sketchcheck using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SKETCHCHECK_*` prefix, `__` as separator)
//! 2. Standard CI environment variables (`GITHUB_REPOSITORY`,
//!    `GITHUB_TOKEN`, `GITHUB_WORKSPACE`)
//! 3. Project-level `.sketchcheck/config.toml`
//! 4. User-level `~/.config/sketchcheck/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SKETCHCHECK_GITHUB__REPOSITORY` -> `github.repository`,
//! `SKETCHCHECK_DATABASE__SOURCE` -> `database.source`, etc. The `__`
//! (double underscore) separates nested config sections. The CI variables
//! map onto the same tree, so a workflow needs no sketchcheck-specific
//! setup beyond the database location.

mod database;
mod error;
mod github;
mod reports;

pub use database::{DatabaseConfig, DatabaseSource};
pub use error::ConfigError;
pub use github::GithubConfig;
pub use reports::ReportsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SketchcheckConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl SketchcheckConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if `.env`
    /// file loading is wanted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when figment extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support. The typical entry point
    /// for the CLI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when figment extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".sketchcheck/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Standard CI environment
        figment = figment.merge(Self::ci_env());

        // Layer 4: SKETCHCHECK_* environment variables (highest priority)
        figment.merge(Env::prefixed("SKETCHCHECK_").split("__"))
    }

    /// Ensure the GitHub section carries what remote-database runs need.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when repository or token is
    /// missing.
    pub fn require_github(&self) -> Result<(), ConfigError> {
        if self.github.is_configured() {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: "github".to_string(),
            })
        }
    }

    /// Ensure a database source was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `database.source` is
    /// empty.
    pub fn require_database(&self) -> Result<(), ConfigError> {
        if self.database.is_configured() {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: "database".to_string(),
            })
        }
    }

    /// The variables every GitHub Actions job already exports, mapped onto
    /// the config tree.
    fn ci_env() -> Env {
        Env::raw()
            .only(&["GITHUB_REPOSITORY", "GITHUB_TOKEN", "GITHUB_WORKSPACE"])
            .map(|key| match key.as_str() {
                "GITHUB_REPOSITORY" => "github.repository".into(),
                "GITHUB_TOKEN" => "github.token".into(),
                "GITHUB_WORKSPACE" => "reports.workspace".into(),
                other => other.to_ascii_lowercase().into(),
            })
            .split(".")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sketchcheck").join("config.toml"))
    }
}
