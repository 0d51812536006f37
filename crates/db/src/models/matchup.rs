//! Matchup entity: an immutable pair of films offered for judgment.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use filmduel_core::types::{DbId, Timestamp};

/// A row from the `matchups` table.
///
/// Immutable once created. Many matchups may pair the same two films;
/// the one-vote-per-user rule is per matchup, not per film pair.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Matchup {
    pub id: DbId,
    pub side_a: DbId,
    pub side_b: DbId,
    pub created_at: Timestamp,
}

impl Matchup {
    /// Whether `film_id` is one of this matchup's two sides.
    pub fn has_side(&self, film_id: DbId) -> bool {
        film_id == self.side_a || film_id == self.side_b
    }

    /// The side opposite `film_id`, assuming [`has_side`](Self::has_side).
    pub fn other_side(&self, film_id: DbId) -> DbId {
        if film_id == self.side_a {
            self.side_b
        } else {
            self.side_a
        }
    }
}

/// DTO for seeding a matchup.
#[derive(Debug, Deserialize)]
pub struct NewMatchup {
    pub side_a: DbId,
    pub side_b: DbId,
}
