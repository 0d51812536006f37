//! Handlers for matchmaking: serving each user a comparison they have
//! not yet judged.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use filmduel_core::types::UserId;
use filmduel_db::models::matchup::Matchup;
use filmduel_db::repositories::MatchupRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /matchups/next`. The user id comes from
/// the external identity provider and is opaque here.
#[derive(Debug, Deserialize)]
pub struct NextMatchupParams {
    pub user_id: UserId,
}

/// Payload for a served matchup, with the size of the user's
/// remaining eligible pool for progress display.
#[derive(Debug, Serialize)]
pub struct ServedMatchup {
    #[serde(flatten)]
    pub matchup: Matchup,
    pub remaining: i64,
}

/// GET /api/v1/matchups/next?user_id=
///
/// Serve one matchup the user has not judged, chosen uniformly at
/// random among the eligible set. Returns 204 when the pool is
/// exhausted — a defined outcome, not an error.
pub async fn next_matchup(
    State(state): State<AppState>,
    Query(params): Query<NextMatchupParams>,
) -> AppResult<impl IntoResponse> {
    let matchup = MatchupRepo::next_for_user(&state.pool, params.user_id).await?;

    match matchup {
        Some(matchup) => {
            let remaining = MatchupRepo::remaining_for_user(&state.pool, params.user_id).await?;
            Ok(Json(DataResponse {
                data: ServedMatchup { matchup, remaining },
            })
            .into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
