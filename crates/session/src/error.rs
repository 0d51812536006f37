use filmduel_core::types::DbId;

/// Errors raised by the synchronous half of the session state machine.
///
/// All of these indicate a caller bug or a rejected user action; the
/// async failures (submission, refill) are surfaced through
/// [`crate::Settlement`] instead, because they are non-fatal by design.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Action requires the playing phase (current phase: {0:?})")]
    NotPlaying(crate::Phase),

    #[error("Input is locked during an in-flight transition")]
    InputLocked,

    #[error("Film {winner_id} is not a side of the current matchup")]
    InvalidWinner { winner_id: DbId },

    #[error("No advance is in flight")]
    NoAdvanceInFlight,
}
