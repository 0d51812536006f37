//! Route definitions for film lookups.

use axum::routing::get;
use axum::Router;

use crate::handlers::films;
use crate::state::AppState;

/// Routes mounted at `/films`.
///
/// ```text
/// GET /films/{id}    -> get_film
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/films/{id}", get(films::get_film))
}
