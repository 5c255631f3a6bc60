//! Repository for the `campers` table.

use bunklogs_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::camper::{Camper, CamperInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, date_of_birth, emergency_contact_name, \
                       emergency_contact_phone, camper_notes, parent_notes, \
                       created_at, updated_at";

/// Provides camper creation, replacement and name lookups.
pub struct CamperRepo;

impl CamperRepo {
    /// Insert a new camper, returning the created row.
    ///
    /// `date_of_birth` is cast from text; a malformed literal fails with a
    /// database error (SQLSTATE class 22).
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CamperInput,
    ) -> Result<Camper, sqlx::Error> {
        let query = format!(
            "INSERT INTO campers \
                (first_name, last_name, date_of_birth, emergency_contact_name, \
                 emergency_contact_phone, camper_notes, parent_notes) \
             VALUES ($1, $2, $3::date, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camper>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.date_of_birth)
            .bind(&input.emergency_contact_name)
            .bind(&input.emergency_contact_phone)
            .bind(&input.camper_notes)
            .bind(&input.parent_notes)
            .fetch_one(executor)
            .await
    }

    /// Replace every field of an existing camper.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
        input: &CamperInput,
    ) -> Result<Option<Camper>, sqlx::Error> {
        let query = format!(
            "UPDATE campers SET \
                first_name = $2, \
                last_name = $3, \
                date_of_birth = $4::date, \
                emergency_contact_name = $5, \
                emergency_contact_phone = $6, \
                camper_notes = $7, \
                parent_notes = $8 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camper>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.date_of_birth)
            .bind(&input.emergency_contact_name)
            .bind(&input.emergency_contact_phone)
            .bind(&input.camper_notes)
            .bind(&input.parent_notes)
            .fetch_optional(executor)
            .await
    }

    /// All campers whose first and last names match case-insensitively.
    pub async fn find_by_name_ci<'e, E: PgExecutor<'e>>(
        executor: E,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<Camper>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campers \
             WHERE lower(first_name) = lower($1) AND lower(last_name) = lower($2) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Camper>(&query)
            .bind(first_name)
            .bind(last_name)
            .fetch_all(executor)
            .await
    }

    /// Total number of campers.
    pub async fn count<'e, E: PgExecutor<'e>>(executor: E) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM campers")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }
}
