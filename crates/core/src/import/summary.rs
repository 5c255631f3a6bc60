//! Result of an import run and its rendering as user-facing messages.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::error::ImportError;
use super::ImporterKind;

/// How a failed or warned row is identified in the result.
///
/// The camper importer reports line numbers; the others echo the raw row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RowRef {
    Line(u64),
    Fields(IndexMap<String, String>),
}

impl std::fmt::Display for RowRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(line) => write!(f, "{line}"),
            Self::Fields(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// One failed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowFailure {
    pub row: RowRef,
    #[serde(serialize_with = "serialize_display")]
    pub error: ImportError,
}

/// A soft condition on a row that still succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowWarning {
    pub row: RowRef,
    pub warning: String,
}

/// Aggregate outcome of one importer run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub importer: ImporterKind,
    pub dry_run: bool,
    pub success_count: usize,
    pub error_count: usize,
    pub errors: Vec<RowFailure>,
    pub warnings: Vec<RowWarning>,
    /// Rows that inserted a new record. Always zero on a dry run.
    pub created_count: usize,
    /// Rows that updated an existing record. Always zero on a dry run.
    pub updated_count: usize,
}

/// Whether a persisted row inserted or updated its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    Created,
    Updated,
    /// Nothing was written (dry run).
    Skipped,
}

impl ImportSummary {
    pub fn new(importer: ImporterKind, dry_run: bool) -> Self {
        Self {
            importer,
            dry_run,
            success_count: 0,
            error_count: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
            created_count: 0,
            updated_count: 0,
        }
    }

    pub fn record_success(&mut self, outcome: WriteOutcome) {
        self.success_count += 1;
        match outcome {
            WriteOutcome::Created => self.created_count += 1,
            WriteOutcome::Updated => self.updated_count += 1,
            WriteOutcome::Skipped => {}
        }
    }

    pub fn record_failure(&mut self, row: RowRef, error: ImportError) {
        self.errors.push(RowFailure { row, error });
        self.error_count = self.errors.len();
    }

    pub fn record_warning(&mut self, row: RowRef, warning: impl Into<String>) {
        self.warnings.push(RowWarning {
            row,
            warning: warning.into(),
        });
    }

    /// Render the summary as one headline message followed by one message
    /// per failed row and one per warning.
    pub fn messages(&self) -> Vec<FlashMessage> {
        let noun = self.importer.noun();
        let mut messages = Vec::with_capacity(1 + self.errors.len() + self.warnings.len());

        if self.dry_run {
            messages.push(FlashMessage::new(
                MessageLevel::Info,
                format!(
                    "Dry run completed. {} {noun} would be imported.",
                    self.success_count
                ),
            ));
        } else {
            messages.push(FlashMessage::new(
                MessageLevel::Success,
                format!("Successfully imported {} {noun}.", self.success_count),
            ));
        }

        for failure in &self.errors {
            messages.push(FlashMessage::new(
                MessageLevel::Error,
                format!("Row {}: {}", failure.row, failure.error),
            ));
        }
        for warning in &self.warnings {
            messages.push(FlashMessage::new(
                MessageLevel::Warning,
                format!("Row {}: {}", warning.row, warning.warning),
            ));
        }

        messages
    }
}

/// Severity of a [`FlashMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A one-line message for the person who uploaded the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub level: MessageLevel,
    pub text: String,
}

impl FlashMessage {
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

fn serialize_display<T: std::fmt::Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::error::EntityKind;

    fn missing_name() -> ImportError {
        ImportError::MissingField {
            entity: EntityKind::Cabin,
            field: "name",
        }
    }

    #[test]
    fn counts_track_outcomes() {
        let mut summary = ImportSummary::new(ImporterKind::Cabins, false);
        summary.record_success(WriteOutcome::Created);
        summary.record_success(WriteOutcome::Updated);
        summary.record_success(WriteOutcome::Updated);
        summary.record_failure(RowRef::Line(5), missing_name());

        assert_eq!(summary.success_count, 3);
        assert_eq!(summary.created_count, 1);
        assert_eq!(summary.updated_count, 2);
        assert_eq!(summary.error_count, 1);
    }

    #[test]
    fn dry_run_headline() {
        let mut summary = ImportSummary::new(ImporterKind::Campers, true);
        summary.record_success(WriteOutcome::Skipped);
        summary.record_success(WriteOutcome::Skipped);

        let messages = summary.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].level, MessageLevel::Info);
        assert_eq!(
            messages[0].text,
            "Dry run completed. 2 campers would be imported."
        );
        assert_eq!(summary.created_count, 0);
    }

    #[test]
    fn one_message_per_failure() {
        let mut summary = ImportSummary::new(ImporterKind::BunkAssignments, false);
        summary.record_success(WriteOutcome::Created);
        summary.record_failure(RowRef::Line(3), missing_name());
        summary.record_failure(RowRef::Line(4), ImportError::Persistence("boom".into()));

        let messages = summary.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].text, "Successfully imported 1 assignments.");
        assert_eq!(messages[1].level, MessageLevel::Error);
        assert_eq!(messages[1].text, "Row 3: Cabin name is required");
        assert_eq!(messages[2].text, "Row 4: boom");
    }

    #[test]
    fn field_rows_render_like_a_mapping() {
        let row = RowRef::Fields(IndexMap::from([
            ("name".to_string(), "".to_string()),
            ("capacity".to_string(), "5".to_string()),
        ]));
        assert_eq!(row.to_string(), "{name: , capacity: 5}");
    }

    #[test]
    fn serializes_output_contract() {
        let mut summary = ImportSummary::new(ImporterKind::Cabins, false);
        summary.record_success(WriteOutcome::Created);
        summary.record_failure(
            RowRef::Fields(IndexMap::from([("name".to_string(), String::new())])),
            missing_name(),
        );

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["importer"], "cabins");
        assert_eq!(json["success_count"], 1);
        assert_eq!(json["error_count"], 1);
        assert_eq!(json["errors"][0]["row"]["name"], "");
        assert_eq!(json["errors"][0]["error"], "Cabin name is required");
    }
}
