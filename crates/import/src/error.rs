//! Failures that abort a whole import run.
//!
//! Anything tied to a single row is recorded in the
//! [`ImportSummary`](bunklogs_core::import::ImportSummary) instead.

use std::path::PathBuf;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to read {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV or input that is not valid UTF-8.
    #[error("Invalid CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
