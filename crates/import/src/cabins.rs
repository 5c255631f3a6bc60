//! Cabin importer: create-or-update by exact `name`.

use std::io::Read;

use bunklogs_core::import::cabin::validate_cabin_row;
use bunklogs_core::import::{ImportSummary, ImporterKind, RawRow};
use bunklogs_db::models::cabin::UpsertCabin;

use crate::error::PipelineError;
use crate::reader::CsvRows;
use crate::runner::{BackendErrors, BatchRun, RowRefStyle, RowResult, RowSuccess};
use crate::store::CampStore;
use crate::ImportOptions;

pub async fn import_cabins<S, R>(
    store: &mut S,
    input: R,
    options: ImportOptions,
) -> Result<ImportSummary, PipelineError>
where
    S: CampStore + ?Sized,
    R: Read,
{
    let mut run = BatchRun::start(
        ImporterKind::Cabins,
        options,
        RowRefStyle::Fields,
        BackendErrors::Fatal,
    );
    for row in CsvRows::new(input)? {
        let row = row?;
        let result = import_row(store, &row, options.dry_run).await;
        run.settle(&row, result)?;
    }
    Ok(run.finish())
}

async fn import_row<S>(store: &mut S, row: &RawRow, dry_run: bool) -> RowResult
where
    S: CampStore + ?Sized,
{
    let fields = validate_cabin_row(row)?;
    if dry_run {
        return Ok(RowSuccess::skipped());
    }

    let input = UpsertCabin {
        name: fields.name,
        capacity: fields.capacity,
        location: fields.location,
        notes: fields.notes,
    };
    let (cabin, outcome) = store.upsert_cabin(&input).await?;
    tracing::debug!(cabin_id = cabin.id, name = %cabin.name, ?outcome, "Cabin saved");
    Ok(RowSuccess::written(outcome))
}
