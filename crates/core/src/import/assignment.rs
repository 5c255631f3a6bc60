//! Camper bunk assignment rows.
//!
//! Expected header:
//! `camper_first_name,camper_last_name,cabin_name,session_name,start_date,end_date,is_active`
//!
//! Identifiers are whitespace-trimmed; the bunk is located through its
//! cabin/session pair.

use super::error::{EntityKind, ImportError, FIELD_CABIN_AND_SESSION, FIELD_CAMPER_NAME};
use super::fields::{optional_date, parse_is_active, RawRow};

pub const COL_CAMPER_FIRST_NAME: &str = "camper_first_name";
pub const COL_CAMPER_LAST_NAME: &str = "camper_last_name";
pub const COL_CABIN_NAME: &str = "cabin_name";
pub const COL_SESSION_NAME: &str = "session_name";
pub const COL_START_DATE: &str = "start_date";
pub const COL_END_DATE: &str = "end_date";
pub const COL_IS_ACTIVE: &str = "is_active";

/// Normalized assignment fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentFields {
    pub camper_first_name: String,
    pub camper_last_name: String,
    pub cabin_name: String,
    pub session_name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_active: bool,
}

pub fn validate_assignment_row(row: &RawRow) -> Result<AssignmentFields, ImportError> {
    let (Some(first), Some(last)) = (
        row.trimmed(COL_CAMPER_FIRST_NAME),
        row.trimmed(COL_CAMPER_LAST_NAME),
    ) else {
        return Err(ImportError::MissingField {
            entity: EntityKind::BunkAssignment,
            field: FIELD_CAMPER_NAME,
        });
    };

    let (Some(cabin), Some(session)) = (
        row.trimmed(COL_CABIN_NAME),
        row.trimmed(COL_SESSION_NAME),
    ) else {
        return Err(ImportError::MissingField {
            entity: EntityKind::BunkAssignment,
            field: FIELD_CABIN_AND_SESSION,
        });
    };

    Ok(AssignmentFields {
        camper_first_name: first.to_string(),
        camper_last_name: last.to_string(),
        cabin_name: cabin.to_string(),
        session_name: session.to_string(),
        start_date: optional_date(row.get(COL_START_DATE)),
        end_date: optional_date(row.get(COL_END_DATE)),
        is_active: parse_is_active(row.get(COL_IS_ACTIVE)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row(is_active: &str) -> RawRow {
        RawRow::from_pairs(
            2,
            [
                ("camper_first_name", " Ada "),
                ("camper_last_name", "Lovelace"),
                ("cabin_name", "Oak "),
                ("session_name", "Summer"),
                ("start_date", "2025-07-01"),
                ("end_date", ""),
                ("is_active", is_active),
            ],
        )
    }

    #[test]
    fn trims_identifiers() {
        let fields = validate_assignment_row(&full_row("yes")).unwrap();
        assert_eq!(fields.camper_first_name, "Ada");
        assert_eq!(fields.cabin_name, "Oak");
        assert_eq!(fields.start_date.as_deref(), Some("2025-07-01"));
        assert_eq!(fields.end_date, None);
        assert!(fields.is_active);
    }

    #[test]
    fn is_active_flags() {
        assert!(!validate_assignment_row(&full_row("No")).unwrap().is_active);
        assert!(!validate_assignment_row(&full_row("0")).unwrap().is_active);
        assert!(!validate_assignment_row(&full_row("false")).unwrap().is_active);
        assert!(validate_assignment_row(&full_row("")).unwrap().is_active);
        assert!(validate_assignment_row(&full_row("true")).unwrap().is_active);
    }

    #[test]
    fn blank_camper_name_is_missing() {
        let row = RawRow::from_pairs(
            2,
            [
                ("camper_first_name", "   "),
                ("camper_last_name", "Lovelace"),
                ("cabin_name", "Oak"),
                ("session_name", "Summer"),
            ],
        );
        assert_eq!(
            validate_assignment_row(&row).unwrap_err().to_string(),
            "Camper first and last name are required"
        );
    }

    #[test]
    fn missing_session() {
        let row = RawRow::from_pairs(
            2,
            [
                ("camper_first_name", "Ada"),
                ("camper_last_name", "Lovelace"),
                ("cabin_name", "Oak"),
            ],
        );
        assert_eq!(
            validate_assignment_row(&row).unwrap_err().to_string(),
            "Both cabin name and session name are required"
        );
    }
}
