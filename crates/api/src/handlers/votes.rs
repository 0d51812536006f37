//! Handler for recording judgments.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use filmduel_db::models::vote::SubmitVote;
use filmduel_db::repositories::VoteRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/votes
///
/// Validate and record one judgment, then apply the paired rating
/// update inside the same transaction. Error mapping:
///
/// - unknown matchup         -> 404 `NOT_FOUND`
/// - winner not a side       -> 400 `INVALID_WINNER`
/// - (matchup, user) already judged -> 409 `DUPLICATE_VOTE`
/// - other persistence failure      -> 500 `INTERNAL_ERROR`
///
/// Duplicate detection is the storage layer's unique constraint, so
/// two near-simultaneous identical submissions cannot both succeed.
pub async fn submit_vote(
    State(state): State<AppState>,
    Json(input): Json<SubmitVote>,
) -> AppResult<impl IntoResponse> {
    let recorded = VoteRepo::record(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: recorded }),
    ))
}
