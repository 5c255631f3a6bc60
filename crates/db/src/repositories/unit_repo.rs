//! Repository for the `units` table.

use bunklogs_core::import::WriteOutcome;
use sqlx::{FromRow, PgExecutor, Row};

use super::write_outcome;
use crate::models::unit::{Unit, UpsertUnit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, unit_head_id, created_at, updated_at";

/// Provides lookups and create-or-update for units.
pub struct UnitRepo;

impl UnitRepo {
    /// Insert a unit or update the one with the same `name`.
    pub async fn upsert<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &UpsertUnit,
    ) -> Result<(Unit, WriteOutcome), sqlx::Error> {
        let query = format!(
            "INSERT INTO units (name, unit_head_id) \
             VALUES ($1, $2) \
             ON CONFLICT (name) DO UPDATE SET unit_head_id = \
                CASE WHEN $3 THEN EXCLUDED.unit_head_id ELSE units.unit_head_id END \
             RETURNING {COLUMNS}, (xmax = 0) AS inserted"
        );
        let row = sqlx::query(&query)
            .bind(&input.name)
            .bind(input.unit_head_id)
            .bind(input.replace_unit_head)
            .fetch_one(executor)
            .await?;
        let inserted: bool = row.try_get("inserted")?;
        Ok((Unit::from_row(&row)?, write_outcome(inserted)))
    }

    /// Find a unit by exact name.
    pub async fn find_by_name<'e, E: PgExecutor<'e>>(
        executor: E,
        name: &str,
    ) -> Result<Option<Unit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM units WHERE name = $1");
        sqlx::query_as::<_, Unit>(&query)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// List all units ordered by name.
    pub async fn list<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<Unit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM units ORDER BY name");
        sqlx::query_as::<_, Unit>(&query).fetch_all(executor).await
    }
}
