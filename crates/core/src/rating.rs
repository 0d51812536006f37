//! Elo rating math for paired film comparisons.
//!
//! Pure and deterministic: callers load both strengths, apply
//! [`rate_pair`] exactly once per recorded vote, and persist the
//! result. Both sides of a matchup are always updated together.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// K-factor: magnitude of a single rating adjustment.
pub const K_FACTOR: f64 = 32.0;

/// Strength assigned to films that have never been compared.
pub const BASELINE_STRENGTH: f64 = 1500.0;

/// Hard floor; no update may push a strength below this.
pub const STRENGTH_FLOOR: f64 = 1.0;

/// Logistic scale: a 400-point gap means ~10:1 expected odds.
const LOGISTIC_SCALE: f64 = 400.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Updated strengths for both participants of one judged matchup.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct RatingUpdate {
    pub winner: f64,
    pub loser: f64,
}

// ---------------------------------------------------------------------------
// Rating logic
// ---------------------------------------------------------------------------

/// Expected score of the winner-side participant given both strengths.
///
/// `1 / (1 + 10^((loser - winner) / 400))`, the standard logistic
/// expected-outcome model.
pub fn expected_score(winner_strength: f64, loser_strength: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((loser_strength - winner_strength) / LOGISTIC_SCALE))
}

/// Compute both updated strengths after a judgment.
///
/// The winner gains `K * (1 - expected)`, the loser loses the mirror
/// amount. Results are rounded to two decimals and floored at
/// [`STRENGTH_FLOOR`].
pub fn rate_pair(winner_strength: f64, loser_strength: f64) -> RatingUpdate {
    let expected_winner = expected_score(winner_strength, loser_strength);
    let expected_loser = 1.0 - expected_winner;

    RatingUpdate {
        winner: floor_clamp(round2(winner_strength + K_FACTOR * (1.0 - expected_winner))),
        loser: floor_clamp(round2(loser_strength + K_FACTOR * (0.0 - expected_loser))),
    }
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn floor_clamp(value: f64) -> f64 {
    value.max(STRENGTH_FLOOR)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
