//! Cabin rows: `name` (required), `capacity`, `location`, `notes`.

use super::error::{EntityKind, ImportError};
use super::fields::{parse_int_or_zero, require, text_or_empty, RawRow};

pub const COL_NAME: &str = "name";
pub const COL_CAPACITY: &str = "capacity";
pub const COL_LOCATION: &str = "location";
pub const COL_NOTES: &str = "notes";

/// Normalized cabin fields, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CabinFields {
    pub name: String,
    pub capacity: i32,
    pub location: String,
    pub notes: String,
}

pub fn validate_cabin_row(row: &RawRow) -> Result<CabinFields, ImportError> {
    let name = require(row.get(COL_NAME), EntityKind::Cabin, COL_NAME)?;
    let capacity = parse_int_or_zero(row.get(COL_CAPACITY), COL_CAPACITY)?;

    Ok(CabinFields {
        name: name.to_string(),
        capacity,
        location: text_or_empty(row.get(COL_LOCATION)),
        notes: text_or_empty(row.get(COL_NOTES)),
    })
}
