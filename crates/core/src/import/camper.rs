//! Camper rows: `first_name` and `last_name` (required), `date_of_birth`,
//! emergency contact columns and two notes columns.

use super::error::{EntityKind, ImportError};
use super::fields::{optional_date, require, text_or_empty, RawRow};

pub const COL_FIRST_NAME: &str = "first_name";
pub const COL_LAST_NAME: &str = "last_name";
pub const COL_DATE_OF_BIRTH: &str = "date_of_birth";
pub const COL_EMERGENCY_CONTACT_NAME: &str = "emergency_contact_name";
pub const COL_EMERGENCY_CONTACT_PHONE: &str = "emergency_contact_phone";
pub const COL_CAMPER_NOTES: &str = "camper_notes";
pub const COL_PARENT_NOTES: &str = "parent_notes";

/// Normalized camper fields, keyed case-insensitively by the name pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CamperFields {
    pub first_name: String,
    pub last_name: String,
    /// Unparsed; the store validates the format.
    pub date_of_birth: Option<String>,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub camper_notes: String,
    pub parent_notes: String,
}

impl CamperFields {
    /// A camper with only a name, as created implicitly by the assignment
    /// importer.
    pub fn minimal(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            ..Self::default()
        }
    }

    /// "First Last", used in lookup errors.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub fn validate_camper_row(row: &RawRow) -> Result<CamperFields, ImportError> {
    let first_name = require(row.get(COL_FIRST_NAME), EntityKind::Camper, COL_FIRST_NAME)?;
    let last_name = require(row.get(COL_LAST_NAME), EntityKind::Camper, COL_LAST_NAME)?;

    Ok(CamperFields {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth: optional_date(row.get(COL_DATE_OF_BIRTH)),
        emergency_contact_name: text_or_empty(row.get(COL_EMERGENCY_CONTACT_NAME)),
        emergency_contact_phone: text_or_empty(row.get(COL_EMERGENCY_CONTACT_PHONE)),
        camper_notes: text_or_empty(row.get(COL_CAMPER_NOTES)),
        parent_notes: text_or_empty(row.get(COL_PARENT_NOTES)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_columns_default_to_empty() {
        let row = RawRow::from_pairs(2, [("first_name", "Ada"), ("last_name", "Lovelace")]);
        let fields = validate_camper_row(&row).unwrap();
        assert_eq!(fields, CamperFields::minimal("Ada", "Lovelace"));
    }

    #[test]
    fn empty_birth_date_is_no_value() {
        let row = RawRow::from_pairs(
            2,
            [
                ("first_name", "Ada"),
                ("last_name", "Lovelace"),
                ("date_of_birth", ""),
                ("parent_notes", "Allergic to peanuts"),
            ],
        );
        let fields = validate_camper_row(&row).unwrap();
        assert_eq!(fields.date_of_birth, None);
        assert_eq!(fields.parent_notes, "Allergic to peanuts");
    }

    #[test]
    fn first_name_checked_before_last_name() {
        let row = RawRow::from_pairs(2, [("first_name", ""), ("last_name", "")]);
        assert_eq!(
            validate_camper_row(&row).unwrap_err().to_string(),
            "First name is required"
        );

        let row = RawRow::from_pairs(2, [("first_name", "Ada"), ("last_name", "")]);
        assert_eq!(
            validate_camper_row(&row).unwrap_err().to_string(),
            "Last name is required"
        );
    }
}
