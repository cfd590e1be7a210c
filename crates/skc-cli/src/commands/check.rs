//! The check command: load the expected database, load the actual reports,
//! run the comparator, and map the verdict to an exit status.

use anyhow::Context;
use skc_config::{DatabaseSource, SketchcheckConfig};
use skc_core::SketchReport;
use skc_github::{GithubClient, ReportSource};

use crate::annotations;
use crate::cli::CheckArgs;
use crate::commands::RunStatus;

pub async fn run(args: &CheckArgs, config: &SketchcheckConfig) -> anyhow::Result<RunStatus> {
    let config = apply_overrides(args, config);

    let database = load_database(&config).await?;
    tracing::info!(entries = database.len(), "expected database loaded");

    let reports_dir = config.reports.reports_dir();
    let actual = skc_core::load_reports(&reports_dir).with_context(|| {
        format!(
            "failed to load sketch reports from {}",
            reports_dir.display()
        )
    })?;

    if actual.is_empty() {
        // Nothing to validate.
        tracing::info!(dir = %reports_dir.display(), "no sketch reports to check");
        return Ok(RunStatus::Passed);
    }

    Ok(evaluate(&actual, &database))
}

fn apply_overrides(args: &CheckArgs, config: &SketchcheckConfig) -> SketchcheckConfig {
    let mut config = config.clone();
    if let Some(source) = &args.reports_source {
        config.reports.source.clone_from(source);
    }
    if let Some(source) = &args.database_source {
        config.database.source.clone_from(source);
    }
    config
}

/// Run the comparator and emit the failure annotation when inconsistent.
fn evaluate(actual: &[SketchReport], database: &[SketchReport]) -> RunStatus {
    let verdict = skc_core::compare(actual, database);
    if verdict.passed() {
        return RunStatus::Passed;
    }

    for regression in &verdict.regressions {
        tracing::error!(
            sketch = %regression.sketch,
            "compilation failed but the database expects success"
        );
    }
    annotations::error("One or more compilations failed");
    RunStatus::Failed
}

/// Load the expected-outcomes database from wherever it is configured to
/// live: a local directory, a direct archive URL, or a named workflow
/// artifact resolved through the API.
async fn load_database(config: &SketchcheckConfig) -> anyhow::Result<Vec<SketchReport>> {
    config.require_database()?;
    tracing::debug!("getting expected compilation results database");

    let source = match config.database.database_source() {
        DatabaseSource::Local(path) => ReportSource::Local(path),
        DatabaseSource::Url(url) => {
            config.require_github()?;
            let client = GithubClient::new(&config.github.repository, &config.github.token);
            client.fetch_artifact(&url, "database").await?
        }
        DatabaseSource::Artifact(name) => {
            config.require_github()?;
            let client = GithubClient::new(&config.github.repository, &config.github.token);
            let url = client
                .find_artifact_download_url(&name)
                .await?
                .with_context(|| format!("no workflow artifact named '{name}' was found"))?;
            client.fetch_artifact(&url, &name).await?
        }
    };

    let reports = skc_core::load_reports(source.path()).with_context(|| {
        format!(
            "failed to load database reports from {}",
            source.path().display()
        )
    })?;
    Ok(reports)
}
