//! Unit rows: `name` (required) plus an optional unit head given as
//! `unit_head_email` or `unit_head_username`.

use super::error::{EntityKind, ImportError};
use super::fields::{require, RawRow};

pub const COL_NAME: &str = "name";
pub const COL_UNIT_HEAD_EMAIL: &str = "unit_head_email";
pub const COL_UNIT_HEAD_USERNAME: &str = "unit_head_username";

/// How a unit head is identified on a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitHeadRef {
    Email(String),
    Username(String),
}

impl UnitHeadRef {
    /// Classify an identifier: anything containing `@` is an email.
    pub fn parse(identifier: &str) -> Self {
        if identifier.contains('@') {
            Self::Email(identifier.to_string())
        } else {
            Self::Username(identifier.to_string())
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            Self::Email(s) | Self::Username(s) => s,
        }
    }
}

/// Normalized unit fields, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFields {
    pub name: String,
    pub unit_head: Option<UnitHeadRef>,
}

pub fn validate_unit_row(row: &RawRow) -> Result<UnitFields, ImportError> {
    let name = require(row.get(COL_NAME), EntityKind::Unit, COL_NAME)?;

    // The email column wins whenever it is non-empty.
    let unit_head = row
        .non_empty(COL_UNIT_HEAD_EMAIL)
        .or_else(|| row.non_empty(COL_UNIT_HEAD_USERNAME))
        .map(UnitHeadRef::parse);

    Ok(UnitFields {
        name: name.to_string(),
        unit_head,
    })
}

/// Warning recorded when a named unit head cannot be resolved.
pub fn unit_head_not_found_warning(head: &UnitHeadRef) -> String {
    format!(
        "Unit head with identifier {} not found",
        head.identifier()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_identifier() {
        let row = RawRow::from_pairs(2, [("name", "Maccabi"), ("unit_head_email", "ann@camp.org")]);
        let fields = validate_unit_row(&row).unwrap();
        assert_eq!(
            fields.unit_head,
            Some(UnitHeadRef::Email("ann@camp.org".into()))
        );
    }

    #[test]
    fn username_used_when_email_empty() {
        let row = RawRow::from_pairs(
            2,
            [
                ("name", "Maccabi"),
                ("unit_head_email", ""),
                ("unit_head_username", "ann"),
            ],
        );
        let fields = validate_unit_row(&row).unwrap();
        assert_eq!(fields.unit_head, Some(UnitHeadRef::Username("ann".into())));
    }

    #[test]
    fn email_column_holding_a_username_is_a_username_lookup() {
        let head = UnitHeadRef::parse("ann");
        assert_eq!(head, UnitHeadRef::Username("ann".into()));
    }

    #[test]
    fn no_head_columns() {
        let row = RawRow::from_pairs(2, [("name", "Maccabi")]);
        assert_eq!(validate_unit_row(&row).unwrap().unit_head, None);
    }

    #[test]
    fn name_required() {
        let row = RawRow::from_pairs(2, [("unit_head_email", "ann@camp.org")]);
        assert_eq!(
            validate_unit_row(&row).unwrap_err().to_string(),
            "Unit name is required"
        );
    }

    #[test]
    fn warning_names_identifier() {
        let head = UnitHeadRef::Email("ghost@camp.org".into());
        assert_eq!(
            unit_head_not_found_warning(&head),
            "Unit head with identifier ghost@camp.org not found"
        );
    }
}
