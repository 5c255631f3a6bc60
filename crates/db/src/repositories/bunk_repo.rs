//! Repository for the `bunks` table.

use bunklogs_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::bunk::{Bunk, CreateBunk};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, cabin_id, session_id, created_at, updated_at";

/// Provides bunk creation and cabin/session lookups.
pub struct BunkRepo;

impl BunkRepo {
    /// Insert a new bunk, returning the created row.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateBunk,
    ) -> Result<Bunk, sqlx::Error> {
        let query = format!(
            "INSERT INTO bunks (cabin_id, session_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bunk>(&query)
            .bind(input.cabin_id)
            .bind(input.session_id)
            .fetch_one(executor)
            .await
    }

    /// All bunks for a cabin/session pair.
    pub async fn find_by_cabin_and_session<'e, E: PgExecutor<'e>>(
        executor: E,
        cabin_id: DbId,
        session_id: DbId,
    ) -> Result<Vec<Bunk>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bunks WHERE cabin_id = $1 AND session_id = $2 ORDER BY id"
        );
        sqlx::query_as::<_, Bunk>(&query)
            .bind(cabin_id)
            .bind(session_id)
            .fetch_all(executor)
            .await
    }
}
