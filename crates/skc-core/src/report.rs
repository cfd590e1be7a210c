//! Sketch report data model.
//!
//! A sketches report is the JSON artifact produced by the upstream
//! compilation step: one file per sketch, carrying the commit it was built
//! from, the boards it was compiled for, per-board size measurements, and a
//! compilation-success indicator. The indicator's shape drifted across
//! report schema revisions; [`SuccessIndicator`] captures every observed
//! shape and collapses it to one canonical outcome so downstream code never
//! branches on schema version.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SketchReport
// ---------------------------------------------------------------------------

/// One compiled sketch's result set. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchReport {
    /// Sketch name; the identity used to match actual results against the
    /// expected database.
    pub name: String,

    /// Commit the sketch was compiled from. Informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<String>,

    /// Link to the commit on the hosting service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_url: Option<String>,

    /// Per-board results, in report order.
    pub boards: Vec<BoardResult>,

    /// Compilation-success indicator, in whichever shape the producing
    /// schema revision used. Absent from the oldest reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compilation_success: Option<SuccessIndicator>,
}

impl SketchReport {
    /// Normalized overall outcome: `Some(true)` when the sketch compiled,
    /// `Some(false)` when it failed, `None` when the report predates the
    /// indicator field.
    #[must_use]
    pub fn outcome(&self) -> Option<bool> {
        self.compilation_success
            .as_ref()
            .map(SuccessIndicator::succeeded)
    }

    /// Whether any board entry carries size measurements.
    #[must_use]
    pub fn has_size_data(&self) -> bool {
        self.boards.iter().any(|board| board.sizes.is_some())
    }
}

// ---------------------------------------------------------------------------
// BoardResult
// ---------------------------------------------------------------------------

/// One board's outcome for a sketch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardResult {
    /// Fully-qualified board name, e.g. `arduino:avr:uno`.
    pub board: String,

    /// Size measurements for this board. Ignored by the comparator but
    /// required for a report to count as comparable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<SizeMeasurement>>,

    /// Per-board indicator emitted by some schema revisions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compilation_success: Option<SuccessIndicator>,
}

/// A single memory-section measurement.
///
/// Numeric leaves stay raw JSON values because older producers emit `"N/A"`
/// where a number is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeMeasurement {
    /// Memory section name, e.g. `flash` or `RAM for global variables`.
    pub name: String,

    /// Section capacity. Only present in newer schema revisions; the loader
    /// probes for this key to recognize them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<SizeReading>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<SizeReading>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<SizeReading>,
}

/// An absolute/relative usage pair inside a [`SizeMeasurement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// SuccessIndicator
// ---------------------------------------------------------------------------

/// Compilation-success indicator across report schema revisions.
///
/// Three shapes have been observed in the wild: a plain boolean, a
/// stringified boolean, and a per-compilation record list keyed by board and
/// sketch name. Deserialization is untagged, so each report parses into
/// whichever variant its producer wrote; [`Self::succeeded`] is the single
/// normalization point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuccessIndicator {
    Flag(bool),
    Text(String),
    PerCompilation(Vec<CompilationRecord>),
}

impl SuccessIndicator {
    /// Canonical outcome. A textual indicator counts as success only for
    /// `"true"` (any case); a per-compilation list succeeds when every
    /// record does.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(text) => text.trim().eq_ignore_ascii_case("true"),
            Self::PerCompilation(records) => records.iter().all(|record| record.success),
        }
    }
}

/// One compilation attempt inside a [`SuccessIndicator::PerCompilation`]
/// list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationRecord {
    /// FQBN the compilation targeted.
    pub board: String,
    /// Sketch name the compilation belongs to.
    pub name: String,
    pub success: bool,
}
