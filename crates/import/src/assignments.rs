//! Bunk assignment importer.
//!
//! Each row resolves (or creates) its camper, then the cabin, session and
//! bunk, then upserts the assignment keyed by camper and bunk. Outside a dry
//! run every row runs in its own transaction scope, so a camper created for
//! a row whose cabin turns out not to exist is rolled back with it. Store
//! failures inside a scope are recorded against that row; failing to open a
//! scope aborts the run. A dry run opens no scopes, so any store failure
//! aborts it.

use std::io::Read;

use bunklogs_core::import::assignment::validate_assignment_row;
use bunklogs_core::import::error::bunk_identifier;
use bunklogs_core::import::{EntityKind, ImportSummary, ImporterKind, RawRow};
use bunklogs_db::models::assignment::UpsertAssignment;

use crate::error::PipelineError;
use crate::reader::CsvRows;
use crate::resolve::{self, exactly_one};
use crate::runner::{BackendErrors, BatchRun, RowRefStyle, RowResult, RowSuccess};
use crate::store::CampStore;
use crate::ImportOptions;

pub async fn import_assignments<S, R>(
    store: &mut S,
    input: R,
    options: ImportOptions,
) -> Result<ImportSummary, PipelineError>
where
    S: CampStore + ?Sized,
    R: Read,
{
    let backend_errors = if options.dry_run {
        BackendErrors::Fatal
    } else {
        BackendErrors::PerRow
    };
    let mut run = BatchRun::start(
        ImporterKind::BunkAssignments,
        options,
        RowRefStyle::Fields,
        backend_errors,
    );
    for row in CsvRows::new(input)? {
        let row = row?;
        let result = if options.dry_run {
            import_row(store, &row, true).await
        } else {
            store.begin().await?;
            let result = import_row(store, &row, false).await;
            close_scope(store, row.line, result).await
        };
        run.settle(&row, result)?;
    }
    Ok(run.finish())
}

/// Commit on success, roll back on failure.
async fn close_scope<S>(store: &mut S, line: u64, result: RowResult) -> RowResult
where
    S: CampStore + ?Sized,
{
    match result {
        Ok(success) => {
            store.commit().await?;
            Ok(success)
        }
        Err(err) => {
            if let Err(rollback_err) = store.rollback().await {
                tracing::error!(line, error = %rollback_err, "Failed to roll back assignment row");
            }
            Err(err)
        }
    }
}

async fn import_row<S>(store: &mut S, row: &RawRow, dry_run: bool) -> RowResult
where
    S: CampStore + ?Sized,
{
    let fields = validate_assignment_row(row)?;

    let camper = resolve::camper_or_create(
        store,
        &fields.camper_first_name,
        &fields.camper_last_name,
        dry_run,
    )
    .await?;

    let cabins = store.find_cabins_by_name(&fields.cabin_name).await?;
    let cabin = exactly_one(cabins, EntityKind::Cabin, fields.cabin_name.as_str())?;

    let sessions = store.find_sessions_by_name(&fields.session_name).await?;
    let session = exactly_one(sessions, EntityKind::Session, fields.session_name.as_str())?;

    let bunks = store.find_bunks(cabin.id, session.id).await?;
    let bunk = exactly_one(
        bunks,
        EntityKind::Bunk,
        bunk_identifier(&fields.cabin_name, &fields.session_name),
    )?;

    let camper = match camper.into_camper() {
        Some(camper) if !dry_run => camper,
        _ => return Ok(RowSuccess::skipped()),
    };

    let input = UpsertAssignment {
        camper_id: camper.id,
        bunk_id: bunk.id,
        start_date: fields.start_date,
        end_date: fields.end_date,
        is_active: fields.is_active,
    };
    let (assignment, outcome) = store.upsert_assignment(&input).await?;
    tracing::debug!(
        assignment_id = assignment.id,
        camper_id = camper.id,
        bunk_id = bunk.id,
        ?outcome,
        "Bunk assignment saved"
    );
    Ok(RowSuccess::written(outcome))
}
