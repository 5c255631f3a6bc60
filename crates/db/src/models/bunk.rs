//! Bunk model: one cabin during one session.

use bunklogs_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A bunk row from the `bunks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bunk {
    pub id: DbId,
    pub cabin_id: DbId,
    pub session_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new bunk.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBunk {
    pub cabin_id: DbId,
    pub session_id: DbId,
}
