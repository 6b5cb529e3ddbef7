//! Fixture definitions for conformance campaigns.
//!
//! A fixture file is a JSON document describing a set of formatting cases:
//! each case carries a format string, the arguments to feed it, and the
//! expected outcome (either rendered text or a diagnostic message). Fixture
//! arguments are stored in an owned form so that a whole campaign can be
//! deserialized up front and replayed any number of times.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rangefmt_core::{ToValue, Value};

use crate::error::HarnessError;

/// An owned, serializable argument value.
///
/// Mirrors the borrowed `Value` categories of the formatting engine; a
/// `Seq` variant holds its elements in iteration order (front-to-back for
/// queue-like adaptors, ascending for priority queues).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgValue {
    Char(char),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Pointer(usize),
    Str(String),
    Seq(Vec<ArgValue>),
}

impl ToValue for ArgValue {
    fn to_value(&self) -> Value<'_> {
        match self {
            ArgValue::Char(c) => Value::Char(*c),
            ArgValue::Bool(b) => Value::Bool(*b),
            ArgValue::Int(v) => Value::Int(*v),
            ArgValue::Uint(v) => Value::Uint(*v),
            ArgValue::Float(v) => Value::Float(*v),
            ArgValue::Pointer(p) => Value::Pointer(*p),
            ArgValue::Str(s) => Value::Str(s),
            ArgValue::Seq(items) => items.to_value(),
        }
    }
}

/// Expected outcome of a fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// The format call succeeds and renders exactly this text.
    Output(String),
    /// The format call fails and the diagnostic renders exactly this text.
    Error(String),
}

/// A single conformance case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Stable case identifier, unique within a fixture set.
    pub name: String,
    /// Section of the formatting contract this case exercises.
    pub spec_section: String,
    /// The format string under test.
    pub format: String,
    /// Arguments, in positional order.
    #[serde(default)]
    pub args: Vec<ArgValue>,
    /// Expected outcome.
    pub expected: Expectation,
}

impl FixtureCase {
    /// Borrow the owned arguments as engine values.
    #[must_use]
    pub fn values(&self) -> Vec<Value<'_>> {
        self.args.iter().map(ToValue::to_value).collect()
    }
}

/// A named collection of conformance cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Campaign name, used in report titles.
    pub campaign: String,
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load a fixture set from a JSON file.
    pub fn load(path: &Path) -> Result<FixtureSet, HarnessError> {
        let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let set = serde_json::from_str(&text)?;
        Ok(set)
    }

    /// Serialize the fixture set back to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
