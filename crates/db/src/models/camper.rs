//! Camper entity model and DTOs.

use bunklogs_core::import::camper::CamperFields;
use bunklogs_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A camper row from the `campers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Camper {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub camper_notes: String,
    pub parent_notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a camper or replacing all of an existing camper's
/// fields.
#[derive(Debug, Clone, Deserialize)]
pub struct CamperInput {
    pub first_name: String,
    pub last_name: String,
    /// Unparsed date literal, cast by the database.
    pub date_of_birth: Option<String>,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub camper_notes: String,
    pub parent_notes: String,
}

impl From<CamperFields> for CamperInput {
    fn from(fields: CamperFields) -> Self {
        Self {
            first_name: fields.first_name,
            last_name: fields.last_name,
            date_of_birth: fields.date_of_birth,
            emergency_contact_name: fields.emergency_contact_name,
            emergency_contact_phone: fields.emergency_contact_phone,
            camper_notes: fields.camper_notes,
            parent_notes: fields.parent_notes,
        }
    }
}
