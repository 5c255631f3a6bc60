//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create or upsert DTO for writes
//!
//! Date columns on write DTOs are raw strings; PostgreSQL parses them and
//! rejects malformed values.

pub mod assignment;
pub mod bunk;
pub mod cabin;
pub mod camper;
pub mod session;
pub mod unit;
pub mod user;
