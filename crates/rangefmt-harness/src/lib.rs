//! Conformance testing harness for rangefmt.
//!
//! This crate provides:
//! - Fixture files: JSON campaigns of format string + arguments + expected
//!   output or diagnostic
//! - Fixture verify: replay a campaign through the formatting engine and
//!   compare outcomes
//! - Report generation: human-readable + machine-readable conformance reports

#![forbid(unsafe_code)]

pub mod diff;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{ArgValue, Expectation, FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{Outcome, VerificationResult, VerificationSummary};
