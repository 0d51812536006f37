//! Repository for the `films` table, including the leaderboard query.

use sqlx::PgPool;

use filmduel_core::ranking::{with_ranks, LeaderboardParams};
use filmduel_core::rating::BASELINE_STRENGTH;
use filmduel_core::types::DbId;

use crate::models::film::{Film, Leaderboard, LeaderboardEntry, NewFilm};

/// Column list for `films` queries.
const COLUMNS: &str =
    "id, title, year, image_ref, strength, comparison_count, created_at, updated_at";

/// Provides film lookups, seeding, and the leaderboard view.
pub struct FilmRepo;

impl FilmRepo {
    /// Find a film by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Film>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM films WHERE id = $1");
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a film at baseline strength (seeding path).
    pub async fn insert(pool: &PgPool, input: &NewFilm) -> Result<Film, sqlx::Error> {
        let query = format!(
            "INSERT INTO films (title, year, image_ref, strength) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(&input.title)
            .bind(input.year)
            .bind(&input.image_ref)
            .bind(BASELINE_STRENGTH)
            .fetch_one(pool)
            .await
    }

    /// Produce the leaderboard for validated parameters.
    ///
    /// Filters to `comparison_count >= min_comparisons`, orders by
    /// strength descending with the documented tie-break (comparison
    /// count descending, then id ascending), truncates to `limit`,
    /// and annotates contiguous 1-based ranks. The result is a
    /// point-in-time snapshot; brief staleness under caching is
    /// acceptable to callers.
    pub async fn leaderboard(
        pool: &PgPool,
        params: LeaderboardParams,
    ) -> Result<Leaderboard, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM films \
             WHERE comparison_count >= $1 \
             ORDER BY strength DESC, comparison_count DESC, id ASC \
             LIMIT $2"
        );
        let films = sqlx::query_as::<_, Film>(&query)
            .bind(params.min_comparisons)
            .bind(params.limit)
            .fetch_all(pool)
            .await?;

        let items = with_ranks(films)
            .into_iter()
            .map(|(rank, film)| LeaderboardEntry {
                rank,
                id: film.id,
                title: film.title,
                year: film.year,
                image_ref: film.image_ref,
                strength: film.strength,
                comparison_count: film.comparison_count,
            })
            .collect();

        Ok(Leaderboard {
            items,
            generated_at: chrono::Utc::now(),
            min_comparisons: params.min_comparisons,
        })
    }
}
