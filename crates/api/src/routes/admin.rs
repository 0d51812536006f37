//! Route definitions for admin/dev endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. The seed handler itself checks
/// `seed_enabled` so a disabled deployment answers 403, not 404.
///
/// ```text
/// POST /admin/seed    -> seed
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/admin/seed", post(admin::seed))
}
