//! Development/test seeding handler.
//!
//! Catalog ingestion proper happens out of process; this endpoint
//! exists so dev and test environments can stand up a small pool
//! without one. It is mounted only when `SEED_ENABLED` is set.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use filmduel_core::types::DbId;
use filmduel_db::models::film::NewFilm;
use filmduel_db::models::matchup::NewMatchup;
use filmduel_db::repositories::{FilmRepo, MatchupRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /admin/seed`.
#[derive(Debug, Deserialize)]
pub struct SeedRequest {
    #[serde(default)]
    pub films: Vec<NewFilm>,
    #[serde(default)]
    pub matchups: Vec<NewMatchup>,
}

/// Response payload: ids of everything created.
#[derive(Debug, Serialize)]
pub struct SeedResult {
    pub film_ids: Vec<DbId>,
    pub matchup_ids: Vec<DbId>,
}

/// POST /api/v1/admin/seed
///
/// Insert films (at baseline strength) and matchups. Matchup sides
/// refer to films by id; seed films first or in the same request and
/// use the returned ids in a follow-up call.
pub async fn seed(
    State(state): State<AppState>,
    Json(input): Json<SeedRequest>,
) -> AppResult<impl IntoResponse> {
    if !state.config.seed_enabled {
        return Err(AppError::Forbidden("Seeding is disabled".into()));
    }

    let mut film_ids = Vec::with_capacity(input.films.len());
    for film in &input.films {
        film_ids.push(FilmRepo::insert(&state.pool, film).await?.id);
    }

    let mut matchup_ids = Vec::with_capacity(input.matchups.len());
    for matchup in &input.matchups {
        matchup_ids.push(MatchupRepo::insert(&state.pool, matchup).await?.id);
    }

    tracing::info!(
        films = film_ids.len(),
        matchups = matchup_ids.len(),
        "Catalog seeded",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SeedResult {
                film_ids,
                matchup_ids,
            },
        }),
    ))
}
