//! Pure domain logic for the film arena: rating math, leaderboard
//! ranking rules, shared types, and the domain error taxonomy.
//!
//! Nothing in this crate performs I/O; persistence lives in
//! `filmduel-db` and the HTTP surface in `filmduel-api`.

pub mod error;
pub mod ranking;
pub mod rating;
pub mod types;
