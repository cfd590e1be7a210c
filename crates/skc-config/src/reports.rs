//! Actual-report location configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default artifact/folder name the compilation step writes reports to.
fn default_source() -> String {
    String::from("sketches-reports")
}

/// Default workspace root.
fn default_workspace() -> String {
    String::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportsConfig {
    /// Directory holding the actual sketch reports, relative to the
    /// workspace root.
    #[serde(default = "default_source")]
    pub source: String,

    /// Workspace root the report directory is resolved against. In CI this
    /// comes from `GITHUB_WORKSPACE`.
    #[serde(default = "default_workspace")]
    pub workspace: String,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            workspace: default_workspace(),
        }
    }
}

impl ReportsConfig {
    /// The resolved report directory.
    #[must_use]
    pub fn reports_dir(&self) -> PathBuf {
        PathBuf::from(&self.workspace).join(&self.source)
    }
}
