//! Handlers for the CSV import endpoints.
//!
//! Each endpoint takes a multipart form with the file in `csv_file` and an
//! optional `dry_run` checkbox, runs the importer against the database and
//! returns the summary together with the flash messages to show the user.

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use bunklogs_core::import::fields::parse_is_active;
use bunklogs_core::import::{FlashMessage, ImportSummary, ImporterKind};
use bunklogs_import::{import_bytes, ImportOptions, PgCampStore};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

pub const CSV_FILE_FIELD: &str = "csv_file";
pub const DRY_RUN_FIELD: &str = "dry_run";

/// Summary of an import run plus its rendered messages.
#[derive(Debug, Serialize)]
pub struct ImportResult {
    #[serde(flatten)]
    pub summary: ImportSummary,
    pub messages: Vec<FlashMessage>,
}

/// The parts of an import form we care about.
struct CsvUpload {
    file_name: Option<String>,
    data: Bytes,
    dry_run: bool,
}

/// A checked checkbox arrives as `on`; an unchecked one is omitted.
fn parse_checkbox(value: &str) -> bool {
    !value.trim().is_empty() && parse_is_active(Some(value))
}

async fn read_upload(mut multipart: Multipart) -> AppResult<CsvUpload> {
    let mut file = None;
    let mut dry_run = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(CSV_FILE_FIELD) => {
                let file_name = field.file_name().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((file_name, data));
            }
            Some(DRY_RUN_FIELD) => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                dry_run = parse_checkbox(&value);
            }
            _ => {}
        }
    }

    let (file_name, data) = file.ok_or_else(|| {
        AppError::BadRequest(format!("A CSV file is required in the '{CSV_FILE_FIELD}' field"))
    })?;
    Ok(CsvUpload {
        file_name,
        data,
        dry_run,
    })
}

async fn run_upload(
    kind: ImporterKind,
    state: AppState,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<ImportResult>>> {
    let upload = read_upload(multipart).await?;
    kind.check_file_name(upload.file_name.as_deref())?;

    tracing::info!(
        importer = %kind,
        file_name = upload.file_name.as_deref().unwrap_or(""),
        bytes = upload.data.len(),
        dry_run = upload.dry_run,
        "Received CSV upload"
    );

    let mut store = PgCampStore::new(state.pool.clone());
    let options = ImportOptions {
        dry_run: upload.dry_run,
    };
    let summary = import_bytes(kind, &mut store, &upload.data, options).await?;
    let messages = summary.messages();

    Ok(Json(DataResponse {
        data: ImportResult { summary, messages },
    }))
}

/// POST /api/v1/imports/cabins
pub async fn import_cabins(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<ImportResult>>> {
    run_upload(ImporterKind::Cabins, state, multipart).await
}

/// POST /api/v1/imports/units
pub async fn import_units(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<ImportResult>>> {
    run_upload(ImporterKind::Units, state, multipart).await
}

/// POST /api/v1/imports/campers
pub async fn import_campers(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<ImportResult>>> {
    run_upload(ImporterKind::Campers, state, multipart).await
}

/// POST /api/v1/imports/bunk-assignments
pub async fn import_assignments(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<ImportResult>>> {
    run_upload(ImporterKind::BunkAssignments, state, multipart).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_values() {
        assert!(parse_checkbox("on"));
        assert!(parse_checkbox("true"));
        assert!(!parse_checkbox(""));
        assert!(!parse_checkbox("false"));
        assert!(!parse_checkbox("0"));
    }
}
