//! Film entity and leaderboard row types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use filmduel_core::types::{DbId, Timestamp};

/// A row from the `films` table.
///
/// `strength` and `comparison_count` are mutated only by the vote
/// transaction, always for both sides of a matchup together.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Film {
    pub id: DbId,
    pub title: String,
    pub year: i32,
    pub image_ref: Option<String>,
    pub strength: f64,
    pub comparison_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for seeding a film (admin/dev path; catalog ingestion proper
/// happens out of process).
#[derive(Debug, Deserialize)]
pub struct NewFilm {
    pub title: String,
    pub year: i32,
    pub image_ref: Option<String>,
}

/// One leaderboard entry: film metadata annotated with its 1-based rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub id: DbId,
    pub title: String,
    pub year: i32,
    pub image_ref: Option<String>,
    pub strength: f64,
    pub comparison_count: i32,
}

/// Full leaderboard response payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct Leaderboard {
    pub items: Vec<LeaderboardEntry>,
    pub generated_at: Timestamp,
    pub min_comparisons: i32,
}
