pub mod admin;
pub mod films;
pub mod health;
pub mod leaderboard;
pub mod matchups;
pub mod votes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /matchups/next        next unjudged matchup for a user (GET)
/// /votes                record a judgment (POST)
/// /leaderboard          ranked films (GET)
/// /films/{id}           film lookup (GET)
/// /admin/seed           dev/test catalog seeding (POST, gated)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(matchups::router())
        .merge(votes::router())
        .merge(leaderboard::router())
        .merge(films::router())
        .merge(admin::router())
}
