//! Report loading error types.
//!
//! Old-format reports are a recoverable compatibility case handled inside
//! the loader; everything here is fatal and aborts the run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a report directory.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Directory enumeration or file read failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report file is not valid JSON, or does not match the report shape.
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
