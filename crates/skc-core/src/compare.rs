//! Cross-referencing of actual compilation results against the expected
//! database.

use serde::Serialize;

use crate::report::SketchReport;

/// A sketch that failed to compile even though the expected database records
/// it as compiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Regression {
    pub sketch: String,
}

/// Outcome of one comparator run. Computed fresh per invocation, never
/// persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Verdict {
    pub regressions: Vec<Regression>,
}

impl Verdict {
    /// Whether every actual result is consistent with the database.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.regressions.is_empty()
    }
}

/// Compare actual reports against the expected-outcomes database.
///
/// Only failures are cross-referenced: an actual report whose outcome is
/// success, or whose sketch name the database does not know, raises nothing.
/// The overall verdict is the conjunction across all actual reports, so it
/// does not depend on the order of either input.
#[must_use]
pub fn compare(actual: &[SketchReport], database: &[SketchReport]) -> Verdict {
    let mut verdict = Verdict::default();

    for report in actual {
        if report.outcome() != Some(false) {
            continue;
        }
        // Database names are assumed unique; first match wins.
        let expected = database.iter().find(|entry| entry.name == report.name);
        if expected.is_some_and(|entry| entry.outcome() == Some(true)) {
            verdict.regressions.push(Regression {
                sketch: report.name.clone(),
            });
        }
    }

    verdict
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::compare;
    use crate::report::{BoardResult, SketchReport, SuccessIndicator};

    fn report(name: &str, success: &str) -> SketchReport {
        SketchReport {
            name: name.to_string(),
            commit_hash: Some("abc1234".to_string()),
            commit_url: None,
            boards: vec![BoardResult {
                board: "arduino:avr:uno".to_string(),
                sizes: None,
                compilation_success: None,
            }],
            compilation_success: Some(SuccessIndicator::Text(success.to_string())),
        }
    }

    #[test]
    fn failure_expected_to_compile_is_a_regression() {
        let actual = vec![report("Blink", "false")];
        let database = vec![report("Blink", "true")];

        let verdict = compare(&actual, &database);
        assert!(!verdict.passed());
        assert_eq!(verdict.regressions.len(), 1);
        assert_eq!(verdict.regressions[0].sketch, "Blink");
    }

    #[test]
    fn failure_expected_to_fail_passes() {
        let actual = vec![report("Blink", "false")];
        let database = vec![report("Blink", "false")];
        assert!(compare(&actual, &database).passed());
    }

    #[test]
    fn all_successes_pass_regardless_of_database() {
        let actual = vec![report("Blink", "true"), report("Fade", "true")];
        let database = vec![report("Blink", "false"), report("Fade", "false")];
        assert!(compare(&actual, &database).passed());
    }

    #[test]
    fn unknown_sketches_are_not_flagged() {
        let actual = vec![report("Uncatalogued", "false")];
        let database = vec![report("Blink", "true")];
        assert!(compare(&actual, &database).passed());
    }

    #[test]
    fn verdict_is_invariant_under_reordering() {
        let actual = vec![
            report("Blink", "false"),
            report("Fade", "true"),
            report("Sweep", "false"),
        ];
        let database = vec![
            report("Sweep", "false"),
            report("Blink", "true"),
            report("Fade", "true"),
        ];

        let baseline = compare(&actual, &database).passed();

        let mut actual_rev = actual.clone();
        actual_rev.reverse();
        let mut database_rev = database.clone();
        database_rev.reverse();

        assert_eq!(compare(&actual_rev, &database).passed(), baseline);
        assert_eq!(compare(&actual, &database_rev).passed(), baseline);
        assert_eq!(compare(&actual_rev, &database_rev).passed(), baseline);
    }

    #[test]
    fn one_regression_fails_the_whole_run() {
        let actual = vec![
            report("Blink", "true"),
            report("Fade", "false"),
            report("Sweep", "false"),
        ];
        let database = vec![
            report("Blink", "true"),
            report("Fade", "false"),
            report("Sweep", "true"),
        ];

        let verdict = compare(&actual, &database);
        assert!(!verdict.passed());
        assert_eq!(verdict.regressions.len(), 1);
        assert_eq!(verdict.regressions[0].sketch, "Sweep");
    }

    #[test]
    fn reports_without_an_indicator_raise_nothing() {
        let mut legacy = report("Blink", "true");
        legacy.compilation_success = None;

        let database = vec![report("Blink", "true")];
        assert!(compare(&[legacy], &database).passed());
    }
}
