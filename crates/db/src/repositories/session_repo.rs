//! Repository for the `sessions` table.

use sqlx::PgExecutor;

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, start_date, end_date, created_at, updated_at";

/// Provides session creation and name lookups.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateSession,
    ) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (name, start_date, end_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(&input.name)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(executor)
            .await
    }

    /// All sessions whose name matches case-insensitively.
    pub async fn find_by_name_ci<'e, E: PgExecutor<'e>>(
        executor: E,
        name: &str,
    ) -> Result<Vec<Session>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM sessions WHERE lower(name) = lower($1) ORDER BY id");
        sqlx::query_as::<_, Session>(&query)
            .bind(name)
            .fetch_all(executor)
            .await
    }
}
