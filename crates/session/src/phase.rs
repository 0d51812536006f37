//! Session phases and the pure transition rules between them.

use serde::Serialize;

/// Where the session currently is.
///
/// `Loading` is only ever the initial phase. `Empty` means the user's
/// eligible matchup pool is exhausted; it is not terminal — a later
/// successful refill returns the session to `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Loading,
    Playing,
    Empty,
    Leaderboard,
}

impl Phase {
    /// Phase after the initial load, given whether a matchup arrived.
    pub fn after_load(has_current: bool) -> Self {
        if has_current {
            Self::Playing
        } else {
            Self::Empty
        }
    }

    /// Phase after promoting the look-ahead slot, given whether a
    /// matchup was available to promote.
    pub fn after_promote(has_current: bool) -> Self {
        if has_current {
            Self::Playing
        } else {
            Self::Empty
        }
    }

    /// Phase after leaving the leaderboard view: voting resumes where
    /// it left off unless the pool emptied in the interim.
    pub fn after_leaderboard(has_current: bool) -> Self {
        if has_current {
            Self::Playing
        } else {
            Self::Empty
        }
    }
}
