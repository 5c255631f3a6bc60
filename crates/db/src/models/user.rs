//! User entity model and DTOs.

use bunklogs_core::roles::UserRole;
use bunklogs_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A staff user row from the `users` table. Email is the login identifier;
/// `username` is optional.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: String,
    /// Stored role name, see [`UserRole`].
    pub role: String,
    pub phone_number: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Parsed role. `None` only if the row holds an unknown value.
    pub fn role(&self) -> Option<UserRole> {
        UserRole::from_str(&self.role)
    }

    pub fn is_unit_head(&self) -> bool {
        self.role() == Some(UserRole::UnitHead)
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: String,
    /// Defaults to `COUNSELOR` if omitted.
    pub role: Option<UserRole>,
    pub phone_number: Option<String>,
}
