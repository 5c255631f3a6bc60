pub mod assignments;
pub mod health;
pub mod imports;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /imports/cabins                   CSV upload (multipart)
/// /imports/units                    CSV upload (multipart)
/// /imports/campers                  CSV upload (multipart, .csv only)
/// /imports/bunk-assignments         CSV upload (multipart)
///
/// /bunk-assignments/activate        bulk activate (POST)
/// /bunk-assignments/deactivate      bulk deactivate (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/imports", imports::router())
        .nest("/bunk-assignments", assignments::router())
}
