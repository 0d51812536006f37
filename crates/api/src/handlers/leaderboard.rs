//! Handler for the ranked leaderboard view.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use filmduel_core::ranking;
use filmduel_db::repositories::FilmRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /leaderboard`.
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<i64>,
    pub min_comparisons: Option<i32>,
}

/// GET /api/v1/leaderboard?limit=&min_comparisons=
///
/// Films with `comparison_count >= min_comparisons`, ordered by
/// strength descending (tie-break: comparison count descending, then
/// id), truncated to `limit`, annotated with 1-based ranks and a
/// generation timestamp. Out-of-range parameters are rejected with
/// 400 before any query runs.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> AppResult<impl IntoResponse> {
    let params = ranking::resolve_params(query.limit, query.min_comparisons)?;
    let board = FilmRepo::leaderboard(&state.pool, params).await?;

    Ok(Json(DataResponse { data: board }))
}
