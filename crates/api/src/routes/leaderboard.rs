//! Route definitions for the leaderboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::leaderboard;
use crate::state::AppState;

/// Routes mounted at `/leaderboard`.
///
/// ```text
/// GET /leaderboard    -> get_leaderboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/leaderboard", get(leaderboard::get_leaderboard))
}
