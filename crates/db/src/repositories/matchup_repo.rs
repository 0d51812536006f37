//! Repository for the `matchups` table: matchmaking and seeding.

use sqlx::PgPool;

use filmduel_core::types::{DbId, UserId};

use crate::models::matchup::{Matchup, NewMatchup};

/// Column list for `matchups` queries.
const COLUMNS: &str = "id, side_a, side_b, created_at";

/// Selects matchups for users and seeds the catalog.
pub struct MatchupRepo;

impl MatchupRepo {
    /// Pick one matchup the user has not yet judged, uniformly at
    /// random among all currently eligible ones.
    ///
    /// Eligibility is re-evaluated on every call (no caching): any
    /// vote recorded anywhere can shrink a user's eligible set. An
    /// empty result means the pool is exhausted for this user, which
    /// is a defined outcome, not an error.
    pub async fn next_for_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Option<Matchup>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM matchups m \
             WHERE NOT EXISTS ( \
                 SELECT 1 FROM votes v \
                 WHERE v.matchup_id = m.id AND v.user_id = $1 \
             ) \
             ORDER BY random() \
             LIMIT 1"
        );
        sqlx::query_as::<_, Matchup>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Count the matchups still eligible for this user.
    pub async fn remaining_for_user(pool: &PgPool, user_id: UserId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM matchups m \
             WHERE NOT EXISTS ( \
                 SELECT 1 FROM votes v \
                 WHERE v.matchup_id = m.id AND v.user_id = $1 \
             )",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Find a matchup by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Matchup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM matchups WHERE id = $1");
        sqlx::query_as::<_, Matchup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a matchup (seeding path). The `ck_matchups_distinct_sides`
    /// constraint rejects self-pairs.
    pub async fn insert(pool: &PgPool, input: &NewMatchup) -> Result<Matchup, sqlx::Error> {
        let query = format!(
            "INSERT INTO matchups (side_a, side_b) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Matchup>(&query)
            .bind(input.side_a)
            .bind(input.side_b)
            .fetch_one(pool)
            .await
    }
}
