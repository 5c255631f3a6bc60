//! Route definitions for the CSV importers.
//!
//! Mounted at `/imports`.

use axum::routing::post;
use axum::Router;

use crate::handlers::imports;
use crate::state::AppState;

/// Routes mounted at `/imports`.
///
/// ```text
/// POST   /cabins              -> import_cabins       (multipart)
/// POST   /units               -> import_units        (multipart)
/// POST   /campers             -> import_campers      (multipart)
/// POST   /bunk-assignments    -> import_assignments  (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cabins", post(imports::import_cabins))
        .route("/units", post(imports::import_units))
        .route("/campers", post(imports::import_campers))
        .route("/bunk-assignments", post(imports::import_assignments))
}
