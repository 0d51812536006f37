//! Film lookup handler.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use filmduel_core::error::CoreError;
use filmduel_core::types::DbId;
use filmduel_db::repositories::FilmRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/films/{id}
///
/// Fetch one film with its current strength and comparison count.
pub async fn get_film(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let film = FilmRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Film", id })?;

    Ok(Json(DataResponse { data: film }))
}
