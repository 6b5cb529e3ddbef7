//! Harness-level failures.

use thiserror::Error;

/// Errors raised while loading fixtures or writing reports.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
}
