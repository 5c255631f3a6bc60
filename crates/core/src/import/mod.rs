//! Core types and pure validation for the CSV bulk importers.
//!
//! Each importer module turns a [`RawRow`] into a normalized field set or an
//! [`ImportError`]. Reference resolution and persistence happen in the
//! pipeline crate, against data this module never sees.

pub mod assignment;
pub mod cabin;
pub mod camper;
pub mod error;
pub mod fields;
pub mod summary;
pub mod unit;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub use error::{EntityKind, ImportError};
pub use fields::RawRow;
pub use summary::{
    FlashMessage, ImportSummary, MessageLevel, RowFailure, RowRef, RowWarning, WriteOutcome,
};

/// Which importer produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImporterKind {
    Cabins,
    Units,
    Campers,
    BunkAssignments,
}

impl ImporterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cabins => "cabins",
            Self::Units => "units",
            Self::Campers => "campers",
            Self::BunkAssignments => "bunk_assignments",
        }
    }

    /// Plural noun used in result messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Cabins => "cabins",
            Self::Units => "units",
            Self::Campers => "campers",
            Self::BunkAssignments => "assignments",
        }
    }

    /// Only the camper upload insists on a `.csv` file name.
    pub fn requires_csv_extension(&self) -> bool {
        matches!(self, Self::Campers)
    }

    /// Reject an uploaded file this importer does not accept by name.
    pub fn check_file_name(&self, file_name: Option<&str>) -> Result<(), CoreError> {
        if self.requires_csv_extension() && !file_name.is_some_and(|name| name.ends_with(".csv")) {
            return Err(CoreError::Validation("File must be a CSV file".to_string()));
        }
        Ok(())
    }
}

impl std::fmt::Display for ImporterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_campers_check_the_extension() {
        assert!(ImporterKind::Campers.check_file_name(Some("roster.csv")).is_ok());
        assert!(ImporterKind::Campers.check_file_name(Some("roster.xlsx")).is_err());
        assert!(ImporterKind::Campers.check_file_name(None).is_err());
        assert!(ImporterKind::Cabins.check_file_name(Some("cabins.txt")).is_ok());
    }

    #[test]
    fn assignment_noun_is_short() {
        assert_eq!(ImporterKind::BunkAssignments.as_str(), "bunk_assignments");
        assert_eq!(ImporterKind::BunkAssignments.noun(), "assignments");
    }
}
