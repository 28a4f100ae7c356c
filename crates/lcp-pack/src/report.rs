//! # Validation Reports
//!
//! [`PackReport`] is one pack's outcome; [`BatchReport`] aggregates a run and
//! decides the overall verdict. The aggregate is a value returned to the
//! driver, so nothing here holds process-wide state.
//!
//! Text rendering follows the established report layout:
//!
//! ```text
//! [OK]   packs/br.yaml
//! [FAIL] packs/in.yaml
//!   - missing `tone`
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use lcp_core::ValidationPolicy;
use serde::Serialize;

use crate::error::PackResult;
use crate::pack::ContentPack;
use crate::parser::load_pack;
use crate::validation::{freshness_warnings, validate_pack};

/// Outcome of processing one pack file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PackOutcome {
    /// The pack loaded and the validator ran.
    Validated {
        violations: Vec<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        warnings: Vec<String>,
    },
    /// The pack could not be loaded; validation was not attempted.
    LoadFailed { error: String },
}

/// One pack's entry in a validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: PackOutcome,
}

impl PackReport {
    /// Load and validate the pack at `path`.
    ///
    /// When `as_of` is given, staleness warnings are computed against it.
    pub fn run(path: &Path, policy: &ValidationPolicy, as_of: Option<NaiveDate>) -> Self {
        Self::from_loaded(path, load_pack(path), policy, as_of)
    }

    /// Build a report from an already-attempted load.
    pub fn from_loaded(
        path: &Path,
        loaded: PackResult<ContentPack>,
        policy: &ValidationPolicy,
        as_of: Option<NaiveDate>,
    ) -> Self {
        let outcome = match loaded {
            Ok(pack) => PackOutcome::Validated {
                violations: validate_pack(&pack, policy),
                warnings: as_of
                    .map(|date| freshness_warnings(&pack, date))
                    .unwrap_or_default(),
            },
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "pack failed to load");
                PackOutcome::LoadFailed {
                    error: e.to_string(),
                }
            }
        };
        Self {
            path: path.to_path_buf(),
            outcome,
        }
    }

    /// `true` if the pack loaded and has no violations.
    pub fn is_ok(&self) -> bool {
        matches!(&self.outcome, PackOutcome::Validated { violations, .. } if violations.is_empty())
    }

    /// Messages to show under a failing pack. A load failure is a single
    /// message.
    pub fn messages(&self) -> Vec<String> {
        match &self.outcome {
            PackOutcome::Validated { violations, .. } => violations.clone(),
            PackOutcome::LoadFailed { error } => vec![format!("YAML load error: {error}")],
        }
    }

    pub fn warnings(&self) -> &[String] {
        match &self.outcome {
            PackOutcome::Validated { warnings, .. } => warnings.as_slice(),
            PackOutcome::LoadFailed { .. } => &[],
        }
    }

    fn render_into(&self, out: &mut String) {
        let status = if self.is_ok() { "[OK]  " } else { "[FAIL]" };
        let _ = writeln!(out, "{status} {}", self.path.display());
        for message in self.messages() {
            let _ = writeln!(out, "  - {message}");
        }
        for warning in self.warnings() {
            let _ = writeln!(out, "  ! {warning}");
        }
    }
}

/// All pack outcomes from one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    reports: Vec<PackReport>,
}

/// Serialized form of a [`BatchReport`], with counts.
#[derive(Serialize)]
struct BatchSummary<'a> {
    success: bool,
    total: usize,
    passed: usize,
    failed: usize,
    packs: &'a [PackReport],
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, report: PackReport) {
        self.reports.push(report);
    }

    pub fn reports(&self) -> &[PackReport] {
        &self.reports
    }

    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// `true` only if at least one pack was checked and none failed. An
    /// empty run is a failure.
    pub fn is_success(&self) -> bool {
        !self.reports.is_empty() && self.failed() == 0
    }

    /// Render the human-readable report.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for report in &self.reports {
            report.render_into(&mut out);
        }
        out
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&BatchSummary {
            success: self.is_success(),
            total: self.total(),
            passed: self.passed(),
            failed: self.failed(),
            packs: &self.reports,
        })
    }
}

impl FromIterator<PackReport> for BatchReport {
    fn from_iter<I: IntoIterator<Item = PackReport>>(iter: I) -> Self {
        Self {
            reports: iter.into_iter().collect(),
        }
    }
}
