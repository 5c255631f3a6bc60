//! Pure domain layer for the Bunk Logs camp backend.
//!
//! Holds the import error taxonomy, row normalization and per-importer
//! validation. Nothing in this crate touches the database, async runtimes
//! or the filesystem.

pub mod error;
pub mod import;
pub mod roles;
pub mod types;
