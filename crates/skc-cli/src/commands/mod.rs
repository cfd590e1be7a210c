use std::process::ExitCode;

use skc_config::SketchcheckConfig;

use crate::cli::Commands;

pub mod check;
pub mod inspect;

/// Outcome of a command run, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every actual result is consistent with the database, or there was
    /// nothing to validate.
    Passed,
    /// At least one compilation inconsistency was detected.
    Failed,
}

impl RunStatus {
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Passed => ExitCode::SUCCESS,
            Self::Failed => ExitCode::FAILURE,
        }
    }
}

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &SketchcheckConfig,
) -> anyhow::Result<RunStatus> {
    match command {
        Commands::Check(args) => check::run(&args, config).await,
        Commands::Inspect(args) => inspect::run(&args, config),
    }
}
