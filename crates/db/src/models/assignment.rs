//! Camper bunk assignment model and DTOs.

use bunklogs_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `camper_bunk_assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CamperBunkAssignment {
    pub id: DbId,
    pub camper_id: DbId,
    pub bunk_id: DbId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for create-or-update keyed by `(camper_id, bunk_id)`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertAssignment {
    pub camper_id: DbId,
    pub bunk_id: DbId,
    /// Unparsed date literal, cast by the database.
    pub start_date: Option<String>,
    /// Unparsed date literal, cast by the database.
    pub end_date: Option<String>,
    pub is_active: bool,
}

/// Request body for bulk activation changes.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentIds {
    pub ids: Vec<DbId>,
}
