//! In-process [`CampStore`] for tests and offline runs.
//!
//! Mirrors the PostgreSQL store wherever the importers can observe the
//! difference. Date literals are parsed at write time and only `YYYY-MM-DD`
//! is accepted. Rollback restores the state captured at `begin`.

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
use bunklogs_db::models::user::{CreateUser, User};
use chrono::{NaiveDate, Utc};

use crate::store::{CampStore, StoreError, StoreResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default)]
struct Tables {
    next_id: DbId,
    users: Vec<User>,
    cabins: Vec<Cabin>,
    units: Vec<Unit>,
    sessions: Vec<Session>,
    bunks: Vec<Bunk>,
    campers: Vec<Camper>,
    assignments: Vec<CamperBunkAssignment>,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Tables,
    /// State at `begin`, restored on rollback.
    snapshot: Option<Tables>,
    offline: bool,
}

fn eq_ci(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn parse_date(value: Option<&str>) -> StoreResult<Option<NaiveDate>> {
    value
        .map(|s| {
            NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| {
                StoreError::Rejected(format!("invalid input syntax for type date: \"{s}\""))
            })
        })
        .transpose()
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`StoreError::Backend`], as if
    /// the database had gone away.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    fn ensure_online(&self) -> StoreResult<()> {
        if self.offline {
            return Err(StoreError::backend("connection refused"));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Seeding
    // -----------------------------------------------------------------------

    pub fn seed_user(&mut self, input: CreateUser) -> User {
        let now = Utc::now();
        let user = User {
            id: self.tables.next_id(),
            email: input.email,
            username: input.username,
            first_name: input.first_name,
            last_name: input.last_name,
            role: input.role.unwrap_or_default().as_str().to_string(),
            phone_number: input.phone_number.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.tables.users.push(user.clone());
        user
    }

    pub fn seed_cabin(&mut self, name: &str) -> Cabin {
        let now = Utc::now();
        let cabin = Cabin {
            id: self.tables.next_id(),
            name: name.to_string(),
            capacity: 0,
            location: String::new(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        };
        self.tables.cabins.push(cabin.clone());
        cabin
    }

    pub fn seed_session(
        &mut self,
        name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Session {
        let now = Utc::now();
        let session = Session {
            id: self.tables.next_id(),
            name: name.to_string(),
            start_date,
            end_date,
            created_at: now,
            updated_at: now,
        };
        self.tables.sessions.push(session.clone());
        session
    }

    /// Bunks are not unique per cabin/session here, so tests can set up
    /// ambiguous lookups.
    pub fn seed_bunk(&mut self, cabin_id: DbId, session_id: DbId) -> Bunk {
        let now = Utc::now();
        let bunk = Bunk {
            id: self.tables.next_id(),
            cabin_id,
            session_id,
            created_at: now,
            updated_at: now,
        };
        self.tables.bunks.push(bunk.clone());
        bunk
    }

    pub fn seed_camper(&mut self, first_name: &str, last_name: &str) -> Camper {
        let now = Utc::now();
        let camper = Camper {
            id: self.tables.next_id(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_of_birth: None,
            emergency_contact_name: String::new(),
            emergency_contact_phone: String::new(),
            camper_notes: String::new(),
            parent_notes: String::new(),
            created_at: now,
            updated_at: now,
        };
        self.tables.campers.push(camper.clone());
        camper
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    pub fn cabins(&self) -> &[Cabin] {
        &self.tables.cabins
    }

    pub fn units(&self) -> &[Unit] {
        &self.tables.units
    }

    pub fn campers(&self) -> &[Camper] {
        &self.tables.campers
    }

    pub fn assignments(&self) -> &[CamperBunkAssignment] {
        &self.tables.assignments
    }

    pub fn cabin(&self, name: &str) -> Option<&Cabin> {
        self.tables.cabins.iter().find(|c| c.name == name)
    }

    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.tables.units.iter().find(|u| u.name == name)
    }

    pub fn in_transaction(&self) -> bool {
        self.snapshot.is_some()
    }
}

#[async_trait]
impl CampStore for MemoryStore {
    async fn upsert_cabin(&mut self, input: &UpsertCabin) -> StoreResult<(Cabin, WriteOutcome)> {
        self.ensure_online()?;
        let now = Utc::now();
        if let Some(cabin) = self.tables.cabins.iter_mut().find(|c| c.name == input.name) {
            cabin.capacity = input.capacity;
            cabin.location.clone_from(&input.location);
            cabin.notes.clone_from(&input.notes);
            cabin.updated_at = now;
            return Ok((cabin.clone(), WriteOutcome::Updated));
        }
        let cabin = Cabin {
            id: self.tables.next_id(),
            name: input.name.clone(),
            capacity: input.capacity,
            location: input.location.clone(),
            notes: input.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        self.tables.cabins.push(cabin.clone());
        Ok((cabin, WriteOutcome::Created))
    }

    async fn find_cabins_by_name(&mut self, name: &str) -> StoreResult<Vec<Cabin>> {
        self.ensure_online()?;
        Ok(self
            .tables
            .cabins
            .iter()
            .filter(|c| eq_ci(&c.name, name))
            .cloned()
            .collect())
    }

    async fn find_user_by_email(
        &mut self,
        email: &str,
        role: UserRole,
    ) -> StoreResult<Option<User>> {
        self.ensure_online()?;
        Ok(self
            .tables
            .users
            .iter()
            .find(|u| u.email == email && u.role() == Some(role))
            .cloned())
    }

    async fn find_user_by_username(
        &mut self,
        username: &str,
        role: UserRole,
    ) -> StoreResult<Option<User>> {
        self.ensure_online()?;
        Ok(self
            .tables
            .users
            .iter()
            .find(|u| u.username.as_deref() == Some(username) && u.role() == Some(role))
            .cloned())
    }

    async fn upsert_unit(&mut self, input: &UpsertUnit) -> StoreResult<(Unit, WriteOutcome)> {
        self.ensure_online()?;
        let now = Utc::now();
        if let Some(unit) = self.tables.units.iter_mut().find(|u| u.name == input.name) {
            if input.replace_unit_head {
                unit.unit_head_id = input.unit_head_id;
            }
            unit.updated_at = now;
            return Ok((unit.clone(), WriteOutcome::Updated));
        }
        let unit = Unit {
            id: self.tables.next_id(),
            name: input.name.clone(),
            unit_head_id: input.unit_head_id,
            created_at: now,
            updated_at: now,
        };
        self.tables.units.push(unit.clone());
        Ok((unit, WriteOutcome::Created))
    }

    async fn find_campers_by_name(
        &mut self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Vec<Camper>> {
        self.ensure_online()?;
        Ok(self
            .tables
            .campers
            .iter()
            .filter(|c| eq_ci(&c.first_name, first_name) && eq_ci(&c.last_name, last_name))
            .cloned()
            .collect())
    }

    async fn create_camper(&mut self, input: &CamperInput) -> StoreResult<Camper> {
        self.ensure_online()?;
        let date_of_birth = parse_date(input.date_of_birth.as_deref())?;
        let now = Utc::now();
        let camper = Camper {
            id: self.tables.next_id(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            date_of_birth,
            emergency_contact_name: input.emergency_contact_name.clone(),
            emergency_contact_phone: input.emergency_contact_phone.clone(),
            camper_notes: input.camper_notes.clone(),
            parent_notes: input.parent_notes.clone(),
            created_at: now,
            updated_at: now,
        };
        self.tables.campers.push(camper.clone());
        Ok(camper)
    }

    async fn update_camper(&mut self, id: DbId, input: &CamperInput) -> StoreResult<Camper> {
        self.ensure_online()?;
        let date_of_birth = parse_date(input.date_of_birth.as_deref())?;
        let camper = self
            .tables
            .campers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::Rejected(format!("Camper {id} no longer exists")))?;
        camper.first_name.clone_from(&input.first_name);
        camper.last_name.clone_from(&input.last_name);
        camper.date_of_birth = date_of_birth;
        camper.emergency_contact_name.clone_from(&input.emergency_contact_name);
        camper.emergency_contact_phone.clone_from(&input.emergency_contact_phone);
        camper.camper_notes.clone_from(&input.camper_notes);
        camper.parent_notes.clone_from(&input.parent_notes);
        camper.updated_at = Utc::now();
        Ok(camper.clone())
    }

    async fn find_sessions_by_name(&mut self, name: &str) -> StoreResult<Vec<Session>> {
        self.ensure_online()?;
        Ok(self
            .tables
            .sessions
            .iter()
            .filter(|s| eq_ci(&s.name, name))
            .cloned()
            .collect())
    }

    async fn find_bunks(&mut self, cabin_id: DbId, session_id: DbId) -> StoreResult<Vec<Bunk>> {
        self.ensure_online()?;
        Ok(self
            .tables
            .bunks
            .iter()
            .filter(|b| b.cabin_id == cabin_id && b.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn upsert_assignment(
        &mut self,
        input: &UpsertAssignment,
    ) -> StoreResult<(CamperBunkAssignment, WriteOutcome)> {
        self.ensure_online()?;
        let start_date = parse_date(input.start_date.as_deref())?;
        let end_date = parse_date(input.end_date.as_deref())?;
        let now = Utc::now();
        if let Some(assignment) = self
            .tables
            .assignments
            .iter_mut()
            .find(|a| a.camper_id == input.camper_id && a.bunk_id == input.bunk_id)
        {
            assignment.start_date = start_date;
            assignment.end_date = end_date;
            assignment.is_active = input.is_active;
            assignment.updated_at = now;
            return Ok((assignment.clone(), WriteOutcome::Updated));
        }
        let assignment = CamperBunkAssignment {
            id: self.tables.next_id(),
            camper_id: input.camper_id,
            bunk_id: input.bunk_id,
            start_date,
            end_date,
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
        };
        self.tables.assignments.push(assignment.clone());
        Ok((assignment, WriteOutcome::Created))
    }

    async fn begin(&mut self) -> StoreResult<()> {
        self.ensure_online()?;
        if self.snapshot.is_some() {
            return Err(StoreError::backend("a transaction is already open"));
        }
        self.snapshot = Some(self.tables.clone());
        Ok(())
    }

    async fn commit(&mut self) -> StoreResult<()> {
        self.ensure_online()?;
        self.snapshot
            .take()
            .map(|_| ())
            .ok_or_else(|| StoreError::backend("no open transaction to commit"))
    }

    async fn rollback(&mut self) -> StoreResult<()> {
        let snapshot = self
            .snapshot
            .take()
            .ok_or_else(|| StoreError::backend("no open transaction to roll back"))?;
        self.tables = snapshot;
        Ok(())
    }
}
