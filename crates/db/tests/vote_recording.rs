//! Integration tests for the vote-recording transaction against a
//! real database:
//! - Paired strength/count update on a recorded vote
//! - Duplicate vote rejection via the unique constraint, with no
//!   score drift
//! - Winner/matchup validation before any mutation
//! - Independent votes from different users on the same matchup

use assert_matches::assert_matches;
use sqlx::PgPool;
use uuid::Uuid;

use filmduel_core::rating;
use filmduel_core::types::DbId;
use filmduel_db::models::film::NewFilm;
use filmduel_db::models::matchup::NewMatchup;
use filmduel_db::models::vote::SubmitVote;
use filmduel_db::repositories::{FilmRepo, MatchupRepo, VoteError, VoteRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_film(title: &str) -> NewFilm {
    NewFilm {
        title: title.to_string(),
        year: 1994,
        image_ref: None,
    }
}

/// Seed two films at baseline strength paired in one matchup; returns
/// (side_a id, side_b id, matchup id).
async fn seed_pair(pool: &PgPool) -> (DbId, DbId, DbId) {
    let a = FilmRepo::insert(pool, &new_film("Left")).await.unwrap();
    let b = FilmRepo::insert(pool, &new_film("Right")).await.unwrap();
    let matchup = MatchupRepo::insert(
        pool,
        &NewMatchup {
            side_a: a.id,
            side_b: b.id,
        },
    )
    .await
    .unwrap();
    (a.id, b.id, matchup.id)
}

async fn film_state(pool: &PgPool, id: DbId) -> (f64, i32) {
    let film = FilmRepo::find_by_id(pool, id).await.unwrap().unwrap();
    (film.strength, film.comparison_count)
}

async fn vote_count(pool: &PgPool, matchup_id: DbId) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM votes WHERE matchup_id = $1")
        .bind(matchup_id)
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// ---------------------------------------------------------------------------
// Test: paired update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_record_applies_paired_update(pool: PgPool) {
    let (side_a, side_b, matchup_id) = seed_pair(&pool).await;

    let recorded = VoteRepo::record(
        &pool,
        &SubmitVote {
            matchup_id,
            winner_id: side_a,
            user_id: Uuid::new_v4(),
        },
    )
    .await
    .unwrap();

    assert_eq!(recorded.vote.matchup_id, matchup_id);
    assert_eq!(recorded.vote.winner_id, side_a);
    assert_eq!(recorded.side_a_strength, 1516.00);
    assert_eq!(recorded.side_b_strength, 1484.00);

    assert_eq!(film_state(&pool, side_a).await, (1516.00, 1));
    assert_eq!(film_state(&pool, side_b).await, (1484.00, 1));
    assert_eq!(vote_count(&pool, matchup_id).await, 1);
}

// ---------------------------------------------------------------------------
// Test: duplicate rejection
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_duplicate_vote_leaves_scores_unchanged(pool: PgPool) {
    let (side_a, side_b, matchup_id) = seed_pair(&pool).await;
    let user_id = Uuid::new_v4();

    VoteRepo::record(
        &pool,
        &SubmitVote {
            matchup_id,
            winner_id: side_a,
            user_id,
        },
    )
    .await
    .unwrap();

    // Same user again, even with the other winner: the unique
    // constraint on (matchup_id, user_id) arbitrates.
    let err = VoteRepo::record(
        &pool,
        &SubmitVote {
            matchup_id,
            winner_id: side_b,
            user_id,
        },
    )
    .await
    .unwrap_err();
    assert_matches!(err, VoteError::DuplicateVote { matchup_id: m } if m == matchup_id);

    // The rollback took the second attempt with it entirely.
    assert_eq!(film_state(&pool, side_a).await, (1516.00, 1));
    assert_eq!(film_state(&pool, side_b).await, (1484.00, 1));
    assert_eq!(vote_count(&pool, matchup_id).await, 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_distinct_users_vote_the_same_matchup(pool: PgPool) {
    let (side_a, side_b, matchup_id) = seed_pair(&pool).await;

    VoteRepo::record(
        &pool,
        &SubmitVote {
            matchup_id,
            winner_id: side_a,
            user_id: Uuid::new_v4(),
        },
    )
    .await
    .unwrap();

    VoteRepo::record(
        &pool,
        &SubmitVote {
            matchup_id,
            winner_id: side_b,
            user_id: Uuid::new_v4(),
        },
    )
    .await
    .unwrap();

    // The second update runs on the stored post-first-vote strengths.
    let expected = rating::rate_pair(1484.00, 1516.00);
    assert_eq!(film_state(&pool, side_b).await, (expected.winner, 2));
    assert_eq!(film_state(&pool, side_a).await, (expected.loser, 2));
    assert_eq!(vote_count(&pool, matchup_id).await, 2);
}

// ---------------------------------------------------------------------------
// Test: validation before mutation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_unknown_matchup_is_not_found(pool: PgPool) {
    let err = VoteRepo::record(
        &pool,
        &SubmitVote {
            matchup_id: 999_999,
            winner_id: 1,
            user_id: Uuid::new_v4(),
        },
    )
    .await
    .unwrap_err();
    assert_matches!(err, VoteError::NotFound(999_999));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_winner_must_be_a_side(pool: PgPool) {
    let (side_a, side_b, matchup_id) = seed_pair(&pool).await;
    let outsider = FilmRepo::insert(&pool, &new_film("Outsider"))
        .await
        .unwrap();

    let err = VoteRepo::record(
        &pool,
        &SubmitVote {
            matchup_id,
            winner_id: outsider.id,
            user_id: Uuid::new_v4(),
        },
    )
    .await
    .unwrap_err();
    assert_matches!(
        err,
        VoteError::InvalidWinner { winner_id, .. } if winner_id == outsider.id
    );

    // Rejected before any mutation: no vote row, baseline untouched.
    assert_eq!(vote_count(&pool, matchup_id).await, 0);
    assert_eq!(film_state(&pool, side_a).await, (1500.00, 0));
    assert_eq!(film_state(&pool, side_b).await, (1500.00, 0));
}
