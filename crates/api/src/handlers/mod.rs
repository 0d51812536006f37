//! HTTP handler functions, grouped per feature area.

pub mod admin;
pub mod films;
pub mod leaderboard;
pub mod matchups;
pub mod votes;
