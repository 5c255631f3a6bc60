//! [`CampStore`] over a PostgreSQL pool.
//!
//! Outside a transaction scope every call borrows a pooled connection; after
//! [`CampStore::begin`] calls run on the open transaction until it is
//! committed or rolled back. A scope that is never closed rolls back when the
//! store is dropped.

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
use bunklogs_db::repositories::{
    AssignmentRepo, BunkRepo, CabinRepo, CamperRepo, SessionRepo, UnitRepo, UserRepo,
};
use bunklogs_db::DbPool;
use sqlx::{Postgres, Transaction};

use crate::store::{CampStore, StoreError, StoreResult};

/// SQLSTATE classes for data the database refused: 22 is "data exception"
/// (bad date literals, out-of-range numbers), 23 is "integrity constraint
/// violation".
const REJECTED_SQLSTATE_CLASSES: &[&str] = &["22", "23"];

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            let rejected = db_err
                .code()
                .is_some_and(|code| REJECTED_SQLSTATE_CLASSES.iter().any(|c| code.starts_with(c)));
            if rejected {
                return StoreError::Rejected(db_err.message().to_string());
            }
        }
        StoreError::Backend(Box::new(err))
    }
}

/// Run a repository call on the open transaction if there is one, otherwise
/// on the pool.
macro_rules! on_executor {
    ($store:expr, |$ex:ident| $call:expr) => {
        match $store.tx.as_mut() {
            Some(tx) => {
                let $ex = &mut **tx;
                $call.await
            }
            None => {
                let $ex = &$store.pool;
                $call.await
            }
        }
    };
}

pub struct PgCampStore {
    pool: DbPool,
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgCampStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool, tx: None }
    }
}

#[async_trait]
impl CampStore for PgCampStore {
    async fn upsert_cabin(&mut self, input: &UpsertCabin) -> StoreResult<(Cabin, WriteOutcome)> {
        Ok(on_executor!(self, |ex| CabinRepo::upsert(ex, input))?)
    }

    async fn find_cabins_by_name(&mut self, name: &str) -> StoreResult<Vec<Cabin>> {
        Ok(on_executor!(self, |ex| CabinRepo::find_by_name_ci(ex, name))?)
    }

    async fn find_user_by_email(
        &mut self,
        email: &str,
        role: UserRole,
    ) -> StoreResult<Option<User>> {
        Ok(on_executor!(self, |ex| UserRepo::find_by_email_and_role(ex, email, role))?)
    }

    async fn find_user_by_username(
        &mut self,
        username: &str,
        role: UserRole,
    ) -> StoreResult<Option<User>> {
        Ok(on_executor!(self, |ex| UserRepo::find_by_username_and_role(
            ex, username, role
        ))?)
    }

    async fn upsert_unit(&mut self, input: &UpsertUnit) -> StoreResult<(Unit, WriteOutcome)> {
        Ok(on_executor!(self, |ex| UnitRepo::upsert(ex, input))?)
    }

    async fn find_campers_by_name(
        &mut self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Vec<Camper>> {
        Ok(on_executor!(self, |ex| CamperRepo::find_by_name_ci(
            ex, first_name, last_name
        ))?)
    }

    async fn create_camper(&mut self, input: &CamperInput) -> StoreResult<Camper> {
        Ok(on_executor!(self, |ex| CamperRepo::create(ex, input))?)
    }

    async fn update_camper(&mut self, id: DbId, input: &CamperInput) -> StoreResult<Camper> {
        on_executor!(self, |ex| CamperRepo::update(ex, id, input))?
            .ok_or_else(|| StoreError::Rejected(format!("Camper {id} no longer exists")))
    }

    async fn find_sessions_by_name(&mut self, name: &str) -> StoreResult<Vec<Session>> {
        Ok(on_executor!(self, |ex| SessionRepo::find_by_name_ci(ex, name))?)
    }

    async fn find_bunks(&mut self, cabin_id: DbId, session_id: DbId) -> StoreResult<Vec<Bunk>> {
        Ok(on_executor!(self, |ex| BunkRepo::find_by_cabin_and_session(
            ex, cabin_id, session_id
        ))?)
    }

    async fn upsert_assignment(
        &mut self,
        input: &UpsertAssignment,
    ) -> StoreResult<(CamperBunkAssignment, WriteOutcome)> {
        Ok(on_executor!(self, |ex| AssignmentRepo::upsert(ex, input))?)
    }

    async fn begin(&mut self) -> StoreResult<()> {
        if self.tx.is_some() {
            return Err(StoreError::backend("a transaction is already open"));
        }
        self.tx = Some(self.pool.begin().await?);
        Ok(())
    }

    async fn commit(&mut self) -> StoreResult<()> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| StoreError::backend("no open transaction to commit"))?;
        tx.commit().await?;
        Ok(())
    }

    async fn rollback(&mut self) -> StoreResult<()> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| StoreError::backend("no open transaction to roll back"))?;
        tx.rollback().await?;
        Ok(())
    }
}
