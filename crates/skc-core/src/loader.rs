//! Report directory loader.
//!
//! Walks a directory of per-sketch JSON reports in lexicographic filename
//! order, filters out reports written by schema revisions that predate size
//! deltas, and returns the reports that carry comparable data.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::ReportError;
use crate::report::SketchReport;

/// Load every comparable sketch report under `dir`.
///
/// Files are visited in sorted filename order so output is reproducible.
/// Old-format reports (no `boards` array, or no `maximum` key inside the
/// first board's first size entry) are skipped with a diagnostic; that is a
/// compatibility filter, not an error. An empty result is also not an error;
/// callers decide what it means.
///
/// # Errors
///
/// Returns [`ReportError`] when the directory cannot be enumerated, a file
/// cannot be read, or a file that passes the schema probe fails to parse.
pub fn load_reports(dir: &Path) -> Result<Vec<SketchReport>, ReportError> {
    let entries = fs::read_dir(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ReportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut reports = Vec::new();
    for path in paths {
        let raw = fs::read_to_string(&path).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|source| ReportError::Json {
            path: path.clone(),
            source,
        })?;

        if !has_deltas_schema(&value) {
            tracing::warn!(path = %path.display(), "old format sketches report found, skipping");
            continue;
        }

        let report: SketchReport =
            serde_json::from_value(value).map_err(|source| ReportError::Json {
                path: path.clone(),
                source,
            })?;

        if report.has_size_data() {
            reports.push(report);
        }
    }

    if reports.is_empty() {
        tracing::warn!(
            dir = %dir.display(),
            "no size-deltas data found in sketches reports; was the compilation step run with size deltas enabled?"
        );
    }

    Ok(reports)
}

/// Probe for the nested `maximum` key that only newer schema revisions emit.
fn has_deltas_schema(value: &Value) -> bool {
    let Some(boards) = value.get("boards").and_then(Value::as_array) else {
        return false;
    };
    boards
        .first()
        .and_then(|board| board.get("sizes"))
        .and_then(Value::as_array)
        .and_then(|sizes| sizes.first())
        .is_some_and(|size| size.get("maximum").is_some())
}
