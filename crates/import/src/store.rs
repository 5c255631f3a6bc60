//! The persistence port the importers run against.
//!
//! Importers never reach a database directly; they are handed a
//! [`CampStore`]. [`crate::pg::PgCampStore`] backs it with PostgreSQL and
//! [`crate::memory::MemoryStore`] keeps everything in process.

use async_trait::async_trait;
use bunklogs_core::import::WriteOutcome;
use bunklogs_core::roles::UserRole;
use bunklogs_core::types::DbId;
use bunklogs_db::models::assignment::{CamperBunkAssignment, UpsertAssignment};
use bunklogs_db::models::bunk::Bunk;
use bunklogs_db::models::cabin::{Cabin, UpsertCabin};
use bunklogs_db::models::camper::{Camper, CamperInput};
use bunklogs_db::models::session::Session;
use bunklogs_db::models::unit::{Unit, UpsertUnit};
use bunklogs_db::models::user::User;

/// Errors raised by a store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store refused the data itself, e.g. a malformed date literal.
    /// Always a row-level failure.
    #[error("{0}")]
    Rejected(String),

    /// The store could not be used at all.
    #[error("Store unavailable: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Backend(err.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Everything the importers need from persistence.
///
/// Name lookups documented as case-insensitive return every match so the
/// caller can tell "none" from "ambiguous".
#[async_trait]
pub trait CampStore: Send {
    /// Insert or update the cabin with the same exact `name`.
    async fn upsert_cabin(&mut self, input: &UpsertCabin) -> StoreResult<(Cabin, WriteOutcome)>;

    /// Cabins whose name matches case-insensitively.
    async fn find_cabins_by_name(&mut self, name: &str) -> StoreResult<Vec<Cabin>>;

    /// First user with this exact email and role.
    async fn find_user_by_email(&mut self, email: &str, role: UserRole)
        -> StoreResult<Option<User>>;

    /// First user with this exact username and role.
    async fn find_user_by_username(
        &mut self,
        username: &str,
        role: UserRole,
    ) -> StoreResult<Option<User>>;

    /// Insert or update the unit with the same exact `name`.
    async fn upsert_unit(&mut self, input: &UpsertUnit) -> StoreResult<(Unit, WriteOutcome)>;

    /// Campers whose first and last names both match case-insensitively.
    async fn find_campers_by_name(
        &mut self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Vec<Camper>>;

    async fn create_camper(&mut self, input: &CamperInput) -> StoreResult<Camper>;

    /// Replace every field of camper `id`.
    async fn update_camper(&mut self, id: DbId, input: &CamperInput) -> StoreResult<Camper>;

    /// Sessions whose name matches case-insensitively.
    async fn find_sessions_by_name(&mut self, name: &str) -> StoreResult<Vec<Session>>;

    /// Bunks for a cabin/session pair.
    async fn find_bunks(&mut self, cabin_id: DbId, session_id: DbId) -> StoreResult<Vec<Bunk>>;

    /// Insert or update the assignment for the same camper and bunk.
    async fn upsert_assignment(
        &mut self,
        input: &UpsertAssignment,
    ) -> StoreResult<(CamperBunkAssignment, WriteOutcome)>;

    /// Open a transaction scope. Every call until [`commit`](Self::commit)
    /// or [`rollback`](Self::rollback) runs inside it. Scopes do not nest.
    async fn begin(&mut self) -> StoreResult<()>;

    async fn commit(&mut self) -> StoreResult<()>;

    async fn rollback(&mut self) -> StoreResult<()>;
}
