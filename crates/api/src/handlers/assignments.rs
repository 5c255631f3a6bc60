//! Bulk activation of camper bunk assignments.
//!
//! Assignments are deactivated rather than deleted so a camper's history
//! in a bunk survives.

use axum::extract::State;
use axum::Json;
use bunklogs_core::error::CoreError;
use bunklogs_core::types::DbId;
use bunklogs_db::models::assignment::AssignmentIds;
use bunklogs_db::repositories::AssignmentRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ActivationResult {
    /// Assignments whose flag actually changed.
    pub updated: u64,
    pub message: String,
}

async fn set_active(
    state: &AppState,
    ids: &[DbId],
    is_active: bool,
) -> AppResult<Json<DataResponse<ActivationResult>>> {
    if ids.is_empty() {
        return Err(CoreError::Validation(
            "At least one assignment id is required".to_string(),
        )
        .into());
    }

    let updated = AssignmentRepo::set_active(&state.pool, ids, is_active).await?;
    tracing::info!(requested = ids.len(), updated, is_active, "Bunk assignments updated");

    let verb = if is_active { "activated" } else { "deactivated" };
    Ok(Json(DataResponse {
        data: ActivationResult {
            updated,
            message: format!("{updated} assignments have been {verb}."),
        },
    }))
}

/// POST /api/v1/bunk-assignments/activate
pub async fn activate(
    State(state): State<AppState>,
    Json(body): Json<AssignmentIds>,
) -> AppResult<Json<DataResponse<ActivationResult>>> {
    set_active(&state, &body.ids, true).await
}

/// POST /api/v1/bunk-assignments/deactivate
pub async fn deactivate(
    State(state): State<AppState>,
    Json(body): Json<AssignmentIds>,
) -> AppResult<Json<DataResponse<ActivationResult>>> {
    set_active(&state, &body.ids, false).await
}
