use std::process::ExitCode;

use clap::Parser;

mod annotations;
mod cli;
mod commands;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(status) => status.exit_code(),
        Err(error) => {
            if is_rate_limit_exhausted(&error) {
                // Quota exhaustion means "nothing to do right now", not a
                // failure; the calling pipeline must stay green.
                annotations::warning("GitHub API request quota has been reached. Giving up for now.");
                ExitCode::SUCCESS
            } else {
                eprintln!("skc error: {error:#}");
                ExitCode::FAILURE
            }
        }
    }
}

async fn run() -> anyhow::Result<commands::RunStatus> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = skc_config::SketchcheckConfig::load_with_dotenv()?;
    commands::dispatch(cli.command, &config).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SKETCHCHECK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn is_rate_limit_exhausted(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<skc_github::GithubError>(),
        Some(skc_github::GithubError::RateLimitExhausted)
    )
}
