//! Vote entity and the vote-recording DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use filmduel_core::types::{DbId, Timestamp, UserId};

/// A row from the `votes` table.
///
/// Append-only: votes are never updated or deleted, and the
/// `uq_votes_matchup_user` constraint keeps them unique per
/// (matchup, user).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Vote {
    pub id: DbId,
    pub matchup_id: DbId,
    pub user_id: UserId,
    pub winner_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for submitting a judgment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitVote {
    pub matchup_id: DbId,
    pub winner_id: DbId,
    pub user_id: UserId,
}

/// Result of a successfully recorded vote: the ledger row plus both
/// films' post-update strengths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedVote {
    pub vote: Vote,
    pub side_a_strength: f64,
    pub side_b_strength: f64,
}
