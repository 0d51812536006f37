//! Route definitions for matchmaking.

use axum::routing::get;
use axum::Router;

use crate::handlers::matchups;
use crate::state::AppState;

/// Routes mounted at `/matchups`.
///
/// ```text
/// GET /matchups/next    -> next_matchup
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/matchups/next", get(matchups::next_matchup))
}
