//! Repository for the `camper_bunk_assignments` table.

use bunklogs_core::import::WriteOutcome;
use bunklogs_core::types::DbId;
use sqlx::{FromRow, PgExecutor, Row};

use super::write_outcome;
use crate::models::assignment::{CamperBunkAssignment, UpsertAssignment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, camper_id, bunk_id, start_date, end_date, is_active, \
                       created_at, updated_at";

/// Provides create-or-update and activation changes for assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert an assignment or update the one for the same camper and bunk.
    pub async fn upsert<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &UpsertAssignment,
    ) -> Result<(CamperBunkAssignment, WriteOutcome), sqlx::Error> {
        let query = format!(
            "INSERT INTO camper_bunk_assignments \
                (camper_id, bunk_id, start_date, end_date, is_active) \
             VALUES ($1, $2, $3::date, $4::date, $5) \
             ON CONFLICT (camper_id, bunk_id) DO UPDATE SET \
                start_date = EXCLUDED.start_date, \
                end_date = EXCLUDED.end_date, \
                is_active = EXCLUDED.is_active \
             RETURNING {COLUMNS}, (xmax = 0) AS inserted"
        );
        let row = sqlx::query(&query)
            .bind(input.camper_id)
            .bind(input.bunk_id)
            .bind(&input.start_date)
            .bind(&input.end_date)
            .bind(input.is_active)
            .fetch_one(executor)
            .await?;
        let inserted: bool = row.try_get("inserted")?;
        Ok((CamperBunkAssignment::from_row(&row)?, write_outcome(inserted)))
    }

    /// Find the assignment for a camper and bunk.
    pub async fn find_by_camper_and_bunk<'e, E: PgExecutor<'e>>(
        executor: E,
        camper_id: DbId,
        bunk_id: DbId,
    ) -> Result<Option<CamperBunkAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM camper_bunk_assignments \
             WHERE camper_id = $1 AND bunk_id = $2"
        );
        sqlx::query_as::<_, CamperBunkAssignment>(&query)
            .bind(camper_id)
            .bind(bunk_id)
            .fetch_optional(executor)
            .await
    }

    /// Set `is_active` on every listed assignment whose flag differs.
    ///
    /// Returns the number of rows changed.
    pub async fn set_active<'e, E: PgExecutor<'e>>(
        executor: E,
        ids: &[DbId],
        is_active: bool,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE camper_bunk_assignments SET is_active = $2 \
             WHERE id = ANY($1) AND is_active <> $2",
        )
        .bind(ids)
        .bind(is_active)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }
}
