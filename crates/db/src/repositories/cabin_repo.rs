//! Repository for the `cabins` table.

use bunklogs_core::import::WriteOutcome;
use sqlx::{FromRow, PgExecutor, Row};

use super::write_outcome;
use crate::models::cabin::{Cabin, UpsertCabin};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, capacity, location, notes, created_at, updated_at";

/// Provides lookups and create-or-update for cabins.
pub struct CabinRepo;

impl CabinRepo {
    /// Insert a cabin or update the one with the same `name`.
    pub async fn upsert<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &UpsertCabin,
    ) -> Result<(Cabin, WriteOutcome), sqlx::Error> {
        let query = format!(
            "INSERT INTO cabins (name, capacity, location, notes) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (name) DO UPDATE SET \
                capacity = EXCLUDED.capacity, \
                location = EXCLUDED.location, \
                notes = EXCLUDED.notes \
             RETURNING {COLUMNS}, (xmax = 0) AS inserted"
        );
        let row = sqlx::query(&query)
            .bind(&input.name)
            .bind(input.capacity)
            .bind(&input.location)
            .bind(&input.notes)
            .fetch_one(executor)
            .await?;
        let inserted: bool = row.try_get("inserted")?;
        Ok((Cabin::from_row(&row)?, write_outcome(inserted)))
    }

    /// Find a cabin by exact name.
    pub async fn find_by_name<'e, E: PgExecutor<'e>>(
        executor: E,
        name: &str,
    ) -> Result<Option<Cabin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cabins WHERE name = $1");
        sqlx::query_as::<_, Cabin>(&query)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// All cabins whose name matches case-insensitively.
    pub async fn find_by_name_ci<'e, E: PgExecutor<'e>>(
        executor: E,
        name: &str,
    ) -> Result<Vec<Cabin>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM cabins WHERE lower(name) = lower($1) ORDER BY id");
        sqlx::query_as::<_, Cabin>(&query)
            .bind(name)
            .fetch_all(executor)
            .await
    }

    /// List all cabins ordered by name.
    pub async fn list<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<Cabin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cabins ORDER BY name");
        sqlx::query_as::<_, Cabin>(&query).fetch_all(executor).await
    }
}
