//! Repository for the `users` table.

use bunklogs_core::roles::UserRole;
use sqlx::PgExecutor;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, username, first_name, last_name, role, phone_number, \
                       created_at, updated_at";

/// Provides user creation and role-filtered lookups.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, username, first_name, last_name, role, phone_number)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.username)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.role.unwrap_or_default().as_str())
            .bind(&input.phone_number)
            .fetch_one(executor)
            .await
    }

    /// First user with this exact email and role.
    pub async fn find_by_email_and_role<'e, E: PgExecutor<'e>>(
        executor: E,
        email: &str,
        role: UserRole,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE email = $1 AND role = $2 ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(role.as_str())
            .fetch_optional(executor)
            .await
    }

    /// First user with this exact username and role.
    pub async fn find_by_username_and_role<'e, E: PgExecutor<'e>>(
        executor: E,
        username: &str,
        role: UserRole,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE username = $1 AND role = $2 ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .bind(role.as_str())
            .fetch_optional(executor)
            .await
    }
}
