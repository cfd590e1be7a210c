use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Cross-reference actual compilation results against the expected
    /// database.
    Check(CheckArgs),
    /// Load a report directory and print what the comparator would see.
    Inspect(InspectArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct CheckArgs {
    /// Report directory relative to the workspace root, overriding the
    /// configured reports.source
    #[arg(long)]
    pub reports_source: Option<String>,

    /// Database location (directory path, archive URL, or artifact:<name>),
    /// overriding the configured database.source
    #[arg(long)]
    pub database_source: Option<String>,
}

#[derive(Clone, Debug, Default, Args)]
pub struct InspectArgs {
    /// Directory to load; defaults to the configured report directory
    pub path: Option<PathBuf>,
}
