//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod film_repo;
pub mod matchup_repo;
pub mod vote_repo;

pub use film_repo::FilmRepo;
pub use matchup_repo::MatchupRepo;
pub use vote_repo::{VoteError, VoteRepo};
