//! Cabin entity model and DTOs.

use bunklogs_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A cabin row from the `cabins` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cabin {
    pub id: DbId,
    pub name: String,
    pub capacity: i32,
    pub location: String,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for create-or-update keyed by `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertCabin {
    pub name: String,
    pub capacity: i32,
    pub location: String,
    pub notes: String,
}
