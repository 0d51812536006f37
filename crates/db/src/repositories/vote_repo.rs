//! Repository for the `votes` table: the vote-recording transaction.

use sqlx::{PgPool, Postgres, Transaction};

use filmduel_core::rating;
use filmduel_core::types::DbId;

use crate::models::film::Film;
use crate::models::matchup::Matchup;
use crate::models::vote::{RecordedVote, SubmitVote, Vote};

/// Column list for `votes` queries.
const VOTE_COLUMNS: &str = "id, matchup_id, user_id, winner_id, created_at";

/// Unique constraint on (matchup_id, user_id); its violation IS the
/// duplicate-vote detection. There is deliberately no prior SELECT.
const UNIQUE_VOTE_CONSTRAINT: &str = "uq_votes_matchup_user";

/// Failure modes of recording a vote.
#[derive(Debug, thiserror::Error)]
pub enum VoteError {
    #[error("Matchup {0} not found")]
    NotFound(DbId),

    #[error("Film {winner_id} is not a side of matchup {matchup_id}")]
    InvalidWinner { matchup_id: DbId, winner_id: DbId },

    #[error("Matchup {matchup_id} was already judged by this user")]
    DuplicateVote { matchup_id: DbId },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Records judgments and applies the paired rating update.
pub struct VoteRepo;

impl VoteRepo {
    /// Validate and record one judgment.
    ///
    /// The whole operation runs in a single transaction: insert the
    /// vote (the unique constraint arbitrates concurrent duplicates),
    /// lock and reload both films, apply the rating math, persist
    /// both new strengths and bumped comparison counts. If anything
    /// fails after the insert, the rollback takes the vote with it —
    /// a judgment only counts once its score update committed.
    pub async fn record(pool: &PgPool, input: &SubmitVote) -> Result<RecordedVote, VoteError> {
        let mut tx = pool.begin().await?;

        let matchup = Self::load_matchup(&mut tx, input.matchup_id)
            .await?
            .ok_or(VoteError::NotFound(input.matchup_id))?;

        if !matchup.has_side(input.winner_id) {
            return Err(VoteError::InvalidWinner {
                matchup_id: input.matchup_id,
                winner_id: input.winner_id,
            });
        }

        let vote = Self::insert_vote(&mut tx, input).await?;

        let loser_id = matchup.other_side(input.winner_id);
        let (winner, loser) = Self::lock_pair(&mut tx, input.winner_id, loser_id).await?;

        let update = rating::rate_pair(winner.strength, loser.strength);
        Self::apply_strength(&mut tx, winner.id, update.winner).await?;
        Self::apply_strength(&mut tx, loser.id, update.loser).await?;

        tx.commit().await?;

        let (side_a_strength, side_b_strength) = if matchup.side_a == winner.id {
            (update.winner, update.loser)
        } else {
            (update.loser, update.winner)
        };

        tracing::info!(
            matchup_id = vote.matchup_id,
            winner_id = vote.winner_id,
            user_id = %vote.user_id,
            winner_strength = update.winner,
            loser_strength = update.loser,
            "Vote recorded",
        );

        Ok(RecordedVote {
            vote,
            side_a_strength,
            side_b_strength,
        })
    }

    async fn load_matchup(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<Matchup>, sqlx::Error> {
        sqlx::query_as::<_, Matchup>(
            "SELECT id, side_a, side_b, created_at FROM matchups WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
    }

    async fn insert_vote(
        tx: &mut Transaction<'_, Postgres>,
        input: &SubmitVote,
    ) -> Result<Vote, VoteError> {
        let query = format!(
            "INSERT INTO votes (matchup_id, user_id, winner_id) \
             VALUES ($1, $2, $3) \
             RETURNING {VOTE_COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(input.matchup_id)
            .bind(input.user_id)
            .bind(input.winner_id)
            .fetch_one(&mut **tx)
            .await
            .map_err(|err| Self::classify_insert_error(err, input.matchup_id))
    }

    /// Map a unique-constraint violation on the vote ledger to
    /// [`VoteError::DuplicateVote`]; everything else passes through.
    fn classify_insert_error(err: sqlx::Error, matchup_id: DbId) -> VoteError {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some(UNIQUE_VOTE_CONSTRAINT)
            {
                return VoteError::DuplicateVote { matchup_id };
            }
        }
        VoteError::Database(err)
    }

    /// Lock both films `FOR UPDATE` and return them as (winner, loser).
    ///
    /// Locks are taken in ascending id order so two concurrent votes
    /// touching overlapping pairs cannot deadlock.
    async fn lock_pair(
        tx: &mut Transaction<'_, Postgres>,
        winner_id: DbId,
        loser_id: DbId,
    ) -> Result<(Film, Film), sqlx::Error> {
        let films = sqlx::query_as::<_, Film>(
            "SELECT id, title, year, image_ref, strength, comparison_count, \
                    created_at, updated_at \
             FROM films WHERE id IN ($1, $2) \
             ORDER BY id \
             FOR UPDATE",
        )
        .bind(winner_id)
        .bind(loser_id)
        .fetch_all(&mut **tx)
        .await?;

        let mut winner = None;
        let mut loser = None;
        for film in films {
            if film.id == winner_id {
                winner = Some(film);
            } else if film.id == loser_id {
                loser = Some(film);
            }
        }

        // Matchup rows carry FKs to films, so both must exist.
        match (winner, loser) {
            (Some(w), Some(l)) => Ok((w, l)),
            _ => Err(sqlx::Error::RowNotFound),
        }
    }

    async fn apply_strength(
        tx: &mut Transaction<'_, Postgres>,
        film_id: DbId,
        strength: f64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE films \
             SET strength = $2, comparison_count = comparison_count + 1, \
                 updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(film_id)
        .bind(strength)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
