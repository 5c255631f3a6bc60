//! Unit entity model and DTOs.

use bunklogs_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A unit row from the `units` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Unit {
    pub id: DbId,
    pub name: String,
    /// References a user with the `UNIT_HEAD` role, if any.
    pub unit_head_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for create-or-update keyed by `name`.
///
/// On update, `unit_head_id` is only written when `replace_unit_head` is
/// set; a row that names no unit head leaves the existing one alone, while
/// a row naming an unknown head clears it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertUnit {
    pub name: String,
    pub unit_head_id: Option<DbId>,
    pub replace_unit_head: bool,
}
