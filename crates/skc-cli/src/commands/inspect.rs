//! Report inspection: load a directory and print what the comparator would
//! see.

use anyhow::Context;
use serde::Serialize;
use skc_config::SketchcheckConfig;
use skc_core::SketchReport;

use crate::cli::InspectArgs;
use crate::commands::RunStatus;

#[derive(Debug, Serialize)]
struct ReportSummary<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit_hash: Option<&'a str>,
    outcome: Option<bool>,
    boards: Vec<&'a str>,
}

pub fn run(args: &InspectArgs, config: &SketchcheckConfig) -> anyhow::Result<RunStatus> {
    let dir = args
        .path
        .clone()
        .unwrap_or_else(|| config.reports.reports_dir());

    let reports = skc_core::load_reports(&dir)
        .with_context(|| format!("failed to load sketch reports from {}", dir.display()))?;

    let summaries: Vec<ReportSummary<'_>> = reports.iter().map(summarize).collect();
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(RunStatus::Passed)
}

fn summarize(report: &SketchReport) -> ReportSummary<'_> {
    ReportSummary {
        name: &report.name,
        commit_hash: report.commit_hash.as_deref(),
        outcome: report.outcome(),
        boards: report
            .boards
            .iter()
            .map(|board| board.board.as_str())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use skc_core::{BoardResult, SketchReport, SuccessIndicator};

    use super::summarize;

    #[test]
    fn summaries_carry_identity_and_outcome() {
        let report = SketchReport {
            name: "Blink".to_string(),
            commit_hash: Some("abc1234".to_string()),
            commit_url: None,
            boards: vec![BoardResult {
                board: "arduino:avr:uno".to_string(),
                sizes: None,
                compilation_success: None,
            }],
            compilation_success: Some(SuccessIndicator::Flag(false)),
        };

        let summary = summarize(&report);
        assert_eq!(summary.name, "Blink");
        assert_eq!(summary.outcome, Some(false));
        assert_eq!(summary.boards, vec!["arduino:avr:uno"]);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["commit_hash"], "abc1234");
    }
}
