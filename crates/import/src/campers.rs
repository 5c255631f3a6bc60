//! Camper importer: create-or-update by case-insensitive first and last
//! name. Failed rows are reported by line number.

use std::io::Read;

use bunklogs_core::import::camper::validate_camper_row;
use bunklogs_core::import::{EntityKind, ImportSummary, ImporterKind, RawRow, WriteOutcome};
use bunklogs_db::models::camper::CamperInput;

use crate::error::PipelineError;
use crate::reader::CsvRows;
use crate::resolve::at_most_one;
use crate::runner::{BackendErrors, BatchRun, RowRefStyle, RowResult, RowSuccess};
use crate::store::CampStore;
use crate::ImportOptions;

pub async fn import_campers<S, R>(
    store: &mut S,
    input: R,
    options: ImportOptions,
) -> Result<ImportSummary, PipelineError>
where
    S: CampStore + ?Sized,
    R: Read,
{
    let mut run = BatchRun::start(
        ImporterKind::Campers,
        options,
        RowRefStyle::Line,
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
    let fields = validate_camper_row(row)?;
    let matches = store
        .find_campers_by_name(&fields.first_name, &fields.last_name)
        .await?;
    let existing = at_most_one(matches, EntityKind::Camper, fields.display_name())?;

    if dry_run {
        return Ok(RowSuccess::skipped());
    }

    let input = CamperInput::from(fields);
    let (camper, outcome) = match existing {
        Some(camper) => (
            store.update_camper(camper.id, &input).await?,
            WriteOutcome::Updated,
        ),
        None => (store.create_camper(&input).await?, WriteOutcome::Created),
    };
    tracing::debug!(camper_id = camper.id, line = row.line, ?outcome, "Camper saved");
    Ok(RowSuccess::written(outcome))
}
