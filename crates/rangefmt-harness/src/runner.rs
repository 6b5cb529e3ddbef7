//! Test execution engine.

use rangefmt_core::vformat;

use crate::fixtures::{Expectation, FixtureCase, FixtureSet};
use crate::verify::{Outcome, VerificationResult};

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    #[must_use]
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| {
                let (expected, actual) = execute_case(case);
                VerificationResult::judge(&case.name, &case.spec_section, expected, actual)
            })
            .collect()
    }
}

/// Feed one case to the engine.
fn execute_case(case: &FixtureCase) -> (Outcome, Outcome) {
    let expected = match &case.expected {
        Expectation::Output(text) => Outcome::Rendered(text.clone()),
        Expectation::Error(message) => Outcome::Diagnostic(message.clone()),
    };
    let values = case.values();
    let actual = match vformat(&case.format, &values) {
        Ok(text) => Outcome::Rendered(text),
        Err(e) => Outcome::Diagnostic(e.to_string()),
    };
    (expected, actual)
}
