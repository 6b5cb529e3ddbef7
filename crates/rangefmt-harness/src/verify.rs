//! Outcome comparison and verification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::diff;

/// What one formatting call produced: rendered text or a diagnostic.
///
/// Expected and actual outcomes compare structurally, so a diagnostic
/// whose text happens to equal an expected rendering can never pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Rendered(String),
    Diagnostic(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Rendered(text) => write!(f, "ok: {text}"),
            Outcome::Diagnostic(text) => write!(f, "err: {text}"),
        }
    }
}

/// Verdict for a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Name of the test case.
    pub case_name: String,
    /// Contract section reference.
    pub spec_section: String,
    /// Outcome the fixture expects.
    pub expected: Outcome,
    /// Outcome the engine produced.
    pub actual: Outcome,
    /// Diff of the two outcomes when they disagree.
    pub diff: Option<String>,
}

impl VerificationResult {
    /// Judge an actual outcome against the expected one.
    #[must_use]
    pub fn judge(
        case_name: impl Into<String>,
        spec_section: impl Into<String>,
        expected: Outcome,
        actual: Outcome,
    ) -> Self {
        let diff = (expected != actual)
            .then(|| diff::render_diff(&expected.to_string(), &actual.to_string()));
        Self {
            case_name: case_name.into(),
            spec_section: spec_section.into(),
            expected,
            actual,
            diff,
        }
    }

    /// Whether the outcomes agreed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total cases run.
    pub total: usize,
    /// Cases passed.
    pub passed: usize,
    /// Cases failed.
    pub failed: usize,
    /// Individual results.
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed()).count();
        Self {
            total,
            passed,
            failed: total - passed,
            results,
        }
    }

    /// Returns true if all cases passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
