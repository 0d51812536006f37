//! Route definitions for vote recording.

use axum::routing::post;
use axum::Router;

use crate::handlers::votes;
use crate::state::AppState;

/// Routes mounted at `/votes`.
///
/// ```text
/// POST /votes    -> submit_vote
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/votes", post(votes::submit_vote))
}
