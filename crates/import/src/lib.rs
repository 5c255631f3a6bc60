//! CSV bulk import pipeline for cabins, units, campers and bunk
//! assignments.
//!
//! Every importer walks a headed CSV document row by row against a
//! [`CampStore`]. Row-level problems never stop a run; they are collected in
//! the returned [`ImportSummary`]. Only unreadable input and an unusable
//! store abort with a [`PipelineError`].

pub mod assignments;
pub mod cabins;
pub mod campers;
pub mod error;
pub mod memory;
pub mod pg;
pub mod reader;
mod resolve;
mod runner;
pub mod store;
pub mod units;

use std::io::Read;
use std::path::Path;

use bunklogs_core::import::{ImportSummary, ImporterKind};

pub use assignments::import_assignments;
pub use cabins::import_cabins;
pub use campers::import_campers;
pub use error::PipelineError;
pub use memory::MemoryStore;
pub use pg::PgCampStore;
pub use store::{CampStore, StoreError};
pub use units::import_units;

/// Per-run settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Validate and resolve every row but write nothing.
    pub dry_run: bool,
}

impl ImportOptions {
    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }
}

/// Run the importer for `kind` over a CSV stream.
pub async fn run_import<S, R>(
    kind: ImporterKind,
    store: &mut S,
    input: R,
    options: ImportOptions,
) -> Result<ImportSummary, PipelineError>
where
    S: CampStore + ?Sized,
    R: Read,
{
    match kind {
        ImporterKind::Cabins => import_cabins(store, input, options).await,
        ImporterKind::Units => import_units(store, input, options).await,
        ImporterKind::Campers => import_campers(store, input, options).await,
        ImporterKind::BunkAssignments => import_assignments(store, input, options).await,
    }
}

/// Run the importer over an in-memory upload, ignoring a leading UTF-8 BOM.
pub async fn import_bytes<S>(
    kind: ImporterKind,
    store: &mut S,
    data: &[u8],
    options: ImportOptions,
) -> Result<ImportSummary, PipelineError>
where
    S: CampStore + ?Sized,
{
    run_import(kind, store, reader::strip_utf8_bom(data), options).await
}

/// Run the importer over a file on disk. A file that cannot be read aborts
/// the run before any row is processed.
pub async fn import_path<S>(
    kind: ImporterKind,
    store: &mut S,
    path: impl AsRef<Path>,
    options: ImportOptions,
) -> Result<ImportSummary, PipelineError>
where
    S: CampStore + ?Sized,
{
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| PipelineError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    import_bytes(kind, store, &data, options).await
}
