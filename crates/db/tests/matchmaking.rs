//! Integration tests for matchmaking: already-judged exclusion and
//! per-user pool accounting against a real database.

use sqlx::PgPool;
use uuid::Uuid;

use filmduel_core::types::DbId;
use filmduel_db::models::film::NewFilm;
use filmduel_db::models::matchup::NewMatchup;
use filmduel_db::models::vote::SubmitVote;
use filmduel_db::repositories::{FilmRepo, MatchupRepo, VoteRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_film(pool: &PgPool, title: &str) -> DbId {
    FilmRepo::insert(
        pool,
        &NewFilm {
            title: title.to_string(),
            year: 1994,
            image_ref: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_matchup(pool: &PgPool, side_a: DbId, side_b: DbId) -> DbId {
    MatchupRepo::insert(pool, &NewMatchup { side_a, side_b })
        .await
        .unwrap()
        .id
}

async fn record_vote(pool: &PgPool, matchup_id: DbId, winner_id: DbId, user_id: Uuid) {
    VoteRepo::record(
        pool,
        &SubmitVote {
            matchup_id,
            winner_id,
            user_id,
        },
    )
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Test: already-judged exclusion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_next_for_user_excludes_judged(pool: PgPool) {
    let a = seed_film(&pool, "A").await;
    let b = seed_film(&pool, "B").await;
    let c = seed_film(&pool, "C").await;
    let first = seed_matchup(&pool, a, b).await;
    let second = seed_matchup(&pool, b, c).await;

    let user_id = Uuid::new_v4();
    record_vote(&pool, first, a, user_id).await;

    // With one matchup judged, the other is the only eligible pick.
    let served = MatchupRepo::next_for_user(&pool, user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(served.id, second);

    let fetched = MatchupRepo::find_by_id(&pool, served.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!((fetched.side_a, fetched.side_b), (b, c));

    record_vote(&pool, second, c, user_id).await;
    let served = MatchupRepo::next_for_user(&pool, user_id).await.unwrap();
    assert!(served.is_none(), "exhausted pool should serve nothing");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_exclusion_is_per_user(pool: PgPool) {
    let a = seed_film(&pool, "A").await;
    let b = seed_film(&pool, "B").await;
    let matchup_id = seed_matchup(&pool, a, b).await;

    let voter = Uuid::new_v4();
    record_vote(&pool, matchup_id, a, voter).await;

    assert!(MatchupRepo::next_for_user(&pool, voter)
        .await
        .unwrap()
        .is_none());

    // Another user's pool is untouched by the first user's vote.
    let other = Uuid::new_v4();
    let served = MatchupRepo::next_for_user(&pool, other)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(served.id, matchup_id);
}

// ---------------------------------------------------------------------------
// Test: pool accounting
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_remaining_for_user_shrinks_with_votes(pool: PgPool) {
    let a = seed_film(&pool, "A").await;
    let b = seed_film(&pool, "B").await;
    let c = seed_film(&pool, "C").await;
    let first = seed_matchup(&pool, a, b).await;
    let second = seed_matchup(&pool, b, c).await;

    let user_id = Uuid::new_v4();
    assert_eq!(
        MatchupRepo::remaining_for_user(&pool, user_id).await.unwrap(),
        2
    );

    record_vote(&pool, first, b, user_id).await;
    assert_eq!(
        MatchupRepo::remaining_for_user(&pool, user_id).await.unwrap(),
        1
    );

    record_vote(&pool, second, b, user_id).await;
    assert_eq!(
        MatchupRepo::remaining_for_user(&pool, user_id).await.unwrap(),
        0
    );

    // A fresh user still sees the whole catalog.
    assert_eq!(
        MatchupRepo::remaining_for_user(&pool, Uuid::new_v4())
            .await
            .unwrap(),
        2
    );
}
