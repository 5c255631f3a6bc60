//! Unit importer: create-or-update by exact `name`, linking an optional unit
//! head.
//!
//! A unit head that cannot be found (or lacks the `UNIT_HEAD` role) does not
//! fail the row: the unit is saved with no head and the row carries a
//! warning. A row naming no unit head leaves an existing unit's head alone.

use std::io::Read;

use bunklogs_core::import::unit::{unit_head_not_found_warning, validate_unit_row};
use bunklogs_core::import::{ImportSummary, ImporterKind, RawRow};
use bunklogs_db::models::unit::UpsertUnit;

use crate::error::PipelineError;
use crate::reader::CsvRows;
use crate::resolve;
use crate::runner::{BackendErrors, BatchRun, RowRefStyle, RowResult, RowSuccess};
use crate::store::CampStore;
use crate::ImportOptions;

pub async fn import_units<S, R>(
    store: &mut S,
    input: R,
    options: ImportOptions,
) -> Result<ImportSummary, PipelineError>
where
    S: CampStore + ?Sized,
    R: Read,
{
    let mut run = BatchRun::start(
        ImporterKind::Units,
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
    let fields = validate_unit_row(row)?;

    let mut unit_head_id = None;
    let mut warning = None;
    if let Some(head) = &fields.unit_head {
        match resolve::unit_head(store, head).await? {
            Some(user) => unit_head_id = Some(user.id),
            None => warning = Some(unit_head_not_found_warning(head)),
        }
    }

    if dry_run {
        return Ok(RowSuccess::skipped().with_warning(warning));
    }

    let input = UpsertUnit {
        name: fields.name,
        unit_head_id,
        replace_unit_head: fields.unit_head.is_some(),
    };
    let (unit, outcome) = store.upsert_unit(&input).await?;
    tracing::debug!(
        unit_id = unit.id,
        name = %unit.name,
        unit_head_id = ?unit.unit_head_id,
        ?outcome,
        "Unit saved"
    );
    Ok(RowSuccess::written(outcome).with_warning(warning))
}
