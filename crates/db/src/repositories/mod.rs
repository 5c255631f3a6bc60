//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Methods accept any [`sqlx::PgExecutor`] as the first argument, so the
//! same call works against `&PgPool` or against the connection of an open
//! transaction.

pub mod assignment_repo;
pub mod bunk_repo;
pub mod cabin_repo;
pub mod camper_repo;
pub mod session_repo;
pub mod unit_repo;
pub mod user_repo;

pub use assignment_repo::AssignmentRepo;
pub use bunk_repo::BunkRepo;
pub use cabin_repo::CabinRepo;
pub use camper_repo::CamperRepo;
pub use session_repo::SessionRepo;
pub use unit_repo::UnitRepo;
pub use user_repo::UserRepo;

use bunklogs_core::import::WriteOutcome;

/// Map the `inserted` flag computed by an upsert (`xmax = 0`) to an outcome.
pub(crate) fn write_outcome(inserted: bool) -> WriteOutcome {
    if inserted {
        WriteOutcome::Created
    } else {
        WriteOutcome::Updated
    }
}
