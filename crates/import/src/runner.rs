//! Row bookkeeping shared by every importer.

use bunklogs_core::import::{ImportError, ImportSummary, ImporterKind, RawRow, RowRef, WriteOutcome};

use crate::error::PipelineError;
use crate::store::StoreError;
use crate::ImportOptions;

/// A processed row.
#[derive(Debug)]
pub(crate) struct RowSuccess {
    pub outcome: WriteOutcome,
    pub warning: Option<String>,
}

impl RowSuccess {
    pub fn written(outcome: WriteOutcome) -> Self {
        Self {
            outcome,
            warning: None,
        }
    }

    pub fn skipped() -> Self {
        Self::written(WriteOutcome::Skipped)
    }

    pub fn with_warning(mut self, warning: Option<String>) -> Self {
        self.warning = warning;
        self
    }
}

#[derive(Debug)]
pub(crate) enum RowError {
    Invalid(ImportError),
    Store(StoreError),
}

impl From<ImportError> for RowError {
    fn from(err: ImportError) -> Self {
        Self::Invalid(err)
    }
}

impl From<StoreError> for RowError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

pub(crate) type RowResult = Result<RowSuccess, RowError>;

/// How a failed row is identified in the summary.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RowRefStyle {
    Line,
    Fields,
}

/// What a [`StoreError::Backend`] on one row means for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BackendErrors {
    /// Abort the run.
    Fatal,
    /// The row's transaction is already rolled back; record it and go on.
    PerRow,
}

pub(crate) struct BatchRun {
    summary: ImportSummary,
    style: RowRefStyle,
    backend_errors: BackendErrors,
}

impl BatchRun {
    pub fn start(
        kind: ImporterKind,
        options: ImportOptions,
        style: RowRefStyle,
        backend_errors: BackendErrors,
    ) -> Self {
        tracing::info!(importer = %kind, dry_run = options.dry_run, "CSV import started");
        Self {
            summary: ImportSummary::new(kind, options.dry_run),
            style,
            backend_errors,
        }
    }

    fn row_ref(&self, row: &RawRow) -> RowRef {
        match self.style {
            RowRefStyle::Line => RowRef::Line(row.line),
            RowRefStyle::Fields => RowRef::Fields(row.fields.clone()),
        }
    }

    /// Fold one row's result into the summary, or escalate it.
    pub fn settle(&mut self, row: &RawRow, result: RowResult) -> Result<(), PipelineError> {
        let error = match result {
            Ok(success) => {
                if let Some(warning) = success.warning {
                    tracing::warn!(line = row.line, %warning, "Row imported with warning");
                    self.summary.record_warning(self.row_ref(row), warning);
                }
                self.summary.record_success(success.outcome);
                return Ok(());
            }
            Err(RowError::Invalid(err)) => err,
            Err(RowError::Store(StoreError::Rejected(message))) => {
                ImportError::Persistence(message)
            }
            Err(RowError::Store(err)) => match self.backend_errors {
                BackendErrors::Fatal => {
                    tracing::error!(line = row.line, error = %err, "Store unavailable, aborting");
                    return Err(err.into());
                }
                BackendErrors::PerRow => ImportError::Persistence(err.to_string()),
            },
        };

        tracing::debug!(line = row.line, code = error.code(), %error, "Row failed");
        self.summary.record_failure(self.row_ref(row), error);
        Ok(())
    }

    pub fn finish(self) -> ImportSummary {
        let summary = self.summary;
        tracing::info!(
            importer = %summary.importer,
            dry_run = summary.dry_run,
            success_count = summary.success_count,
            error_count = summary.error_count,
            created = summary.created_count,
            updated = summary.updated_count,
            "CSV import finished"
        );
        summary
    }
}
