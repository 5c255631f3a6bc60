//! Mounted at `/bunk-assignments`.

use axum::routing::post;
use axum::Router;

use crate::handlers::assignments;
use crate::state::AppState;

/// ```text
/// POST   /activate      -> activate
/// POST   /deactivate    -> deactivate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/activate", post(assignments::activate))
        .route("/deactivate", post(assignments::deactivate))
}
