//! Leaderboard parameter validation and rank assignment.
//!
//! The persistence layer returns films already ordered by the
//! leaderboard sort (strength descending, then comparison count
//! descending, then id ascending — the documented deterministic
//! tie-break); this module owns the bounds checking and the 1-based
//! rank annotation so both stay unit-testable without a database.

use std::cmp::Ordering;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Smallest allowed page size.
pub const MIN_LIMIT: i64 = 1;
/// Largest allowed page size.
pub const MAX_LIMIT: i64 = 100;
/// Page size when the caller does not specify one.
pub const DEFAULT_LIMIT: i64 = 50;
/// Minimum-comparisons filter when the caller does not specify one.
pub const DEFAULT_MIN_COMPARISONS: i32 = 0;

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Validated leaderboard query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardParams {
    pub limit: i64,
    pub min_comparisons: i32,
}

/// Resolve raw query parameters into validated [`LeaderboardParams`].
///
/// Out-of-range values are rejected, not clamped: callers asked for
/// something specific and should hear that it is invalid before any
/// query runs.
pub fn resolve_params(
    limit: Option<i64>,
    min_comparisons: Option<i32>,
) -> Result<LeaderboardParams, CoreError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        return Err(CoreError::Validation(format!(
            "limit must be between {MIN_LIMIT} and {MAX_LIMIT}, got {limit}"
        )));
    }

    let min_comparisons = min_comparisons.unwrap_or(DEFAULT_MIN_COMPARISONS);
    if min_comparisons < 0 {
        return Err(CoreError::Validation(format!(
            "min_comparisons must be non-negative, got {min_comparisons}"
        )));
    }

    Ok(LeaderboardParams {
        limit,
        min_comparisons,
    })
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// The leaderboard sort key for one film.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortKey {
    pub strength: f64,
    pub comparison_count: i32,
    pub id: DbId,
}

/// Compare two films in leaderboard order.
///
/// Strength descending, then comparison count descending (equal
/// strength backed by more comparisons ranks higher), then id
/// ascending so repeated queries return a stable order.
pub fn leaderboard_order(a: &SortKey, b: &SortKey) -> Ordering {
    b.strength
        .total_cmp(&a.strength)
        .then(b.comparison_count.cmp(&a.comparison_count))
        .then(a.id.cmp(&b.id))
}

/// Annotate already-ordered entries with contiguous 1-based ranks.
pub fn with_ranks<T>(entries: Vec<T>) -> Vec<(i64, T)> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| (i as i64 + 1, entry))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- resolve_params --

    #[test]
    fn defaults_apply_when_unspecified() {
        let params = resolve_params(None, None).unwrap();
        assert_eq!(params.limit, DEFAULT_LIMIT);
        assert_eq!(params.min_comparisons, DEFAULT_MIN_COMPARISONS);
    }

    #[test]
    fn limit_bounds_are_inclusive() {
        assert_eq!(resolve_params(Some(1), None).unwrap().limit, 1);
        assert_eq!(resolve_params(Some(100), None).unwrap().limit, 100);
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert!(resolve_params(Some(0), None).is_err());
    }

    #[test]
    fn oversized_limit_is_rejected() {
        assert!(resolve_params(Some(101), None).is_err());
    }

    #[test]
    fn negative_min_comparisons_is_rejected() {
        assert!(resolve_params(None, Some(-1)).is_err());
    }

    #[test]
    fn explicit_min_comparisons_is_kept() {
        let params = resolve_params(None, Some(5)).unwrap();
        assert_eq!(params.min_comparisons, 5);
    }

    // -- leaderboard_order --

    fn key(strength: f64, comparison_count: i32, id: DbId) -> SortKey {
        SortKey {
            strength,
            comparison_count,
            id,
        }
    }

    #[test]
    fn higher_strength_ranks_first() {
        let mut keys = vec![key(1490.0, 9, 1), key(1510.0, 2, 2)];
        keys.sort_by(leaderboard_order);
        assert_eq!(keys[0].id, 2);
    }

    #[test]
    fn equal_strength_breaks_on_comparison_count_then_id() {
        let mut keys = vec![key(1500.0, 3, 9), key(1500.0, 7, 5), key(1500.0, 3, 4)];
        keys.sort_by(leaderboard_order);
        assert_eq!(
            keys.iter().map(|k| k.id).collect::<Vec<_>>(),
            vec![5, 4, 9]
        );
    }

    // -- with_ranks --

    #[test]
    fn ranks_are_contiguous_and_one_based() {
        let ranked = with_ranks(vec!["a", "b", "c"]);
        assert_eq!(ranked, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn empty_input_yields_empty_ranking() {
        let ranked: Vec<(i64, &str)> = with_ranks(vec![]);
        assert!(ranked.is_empty());
    }
}
