//! Async orchestration around [`SessionState`]: the network joins of
//! the commit protocol, look-ahead refills, and leaderboard fetches.

use filmduel_core::types::{DbId, UserId};
use filmduel_db::models::film::Leaderboard;
use filmduel_db::models::matchup::Matchup;
use filmduel_db::models::vote::{RecordedVote, SubmitVote};

use crate::client::{ArenaClient, ClientError};
use crate::error::SessionError;
use crate::phase::Phase;
use crate::state::{SessionState, SessionStats};

/// What happened to the deferred vote when a transition settled.
///
/// A `Lost` submission is final: the UI has already advanced, nothing
/// is rolled back, and nothing is retried. Callers surface it as a
/// non-fatal notice.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The advance was a skip; nothing was submitted.
    NotNeeded,
    Recorded(RecordedVote),
    Lost(ClientError),
}

/// Result of [`SessionController::settle`].
#[derive(Debug)]
pub struct Settlement {
    pub submission: SubmissionOutcome,
    /// Whether the look-ahead slot (or an empty `current`) was filled.
    pub refilled: bool,
}

/// Drives one user's voting session against an [`ArenaClient`].
///
/// The synchronous methods delegate to [`SessionState`] and return
/// immediately; only [`Self::start`], [`Self::settle`],
/// [`Self::refill`], and [`Self::open_leaderboard`] suspend.
pub struct SessionController<C> {
    client: C,
    user_id: UserId,
    state: SessionState,
}

impl<C: ArenaClient> SessionController<C> {
    pub fn new(client: C, user_id: UserId) -> Self {
        Self {
            client,
            user_id,
            state: SessionState::new(),
        }
    }

    // -- accessors --

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn stats(&self) -> SessionStats {
        self.state.stats()
    }

    pub fn current(&self) -> Option<&Matchup> {
        self.state.current()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    // -- lifecycle --

    /// Initial load: fetch the first matchup and prefetch the
    /// look-ahead slot, then leave `Loading`.
    ///
    /// A failed first fetch keeps the session in `Loading` so the
    /// caller may try again; a failed prefetch is non-fatal and just
    /// leaves the slot empty for a later refill.
    pub async fn start(&mut self) -> Result<Phase, ClientError> {
        let current = self.client.next_matchup(self.user_id).await?;

        let next = match &current {
            Some(current) => match self.client.next_matchup(self.user_id).await {
                // Until a vote is recorded, the server may hand the
                // same matchup back; keep the slot empty in that case.
                Ok(Some(m)) if m.id == current.id => None,
                Ok(m) => m,
                Err(err) => {
                    tracing::warn!(error = %err, "Look-ahead prefetch failed");
                    None
                }
            },
            None => None,
        };

        Ok(self.state.begin(current, next))
    }

    /// Capture a decision for the current matchup (synchronous; the
    /// exit transition may start immediately).
    pub fn decide(&mut self, winner_id: DbId) -> Result<(), SessionError> {
        self.state.decide(winner_id)
    }

    /// Start skipping the current matchup. Nothing will be submitted.
    pub fn skip(&mut self) -> Result<(), SessionError> {
        self.state.begin_skip()
    }

    /// The exit transition finished: promote the look-ahead slot and
    /// count the advance, without any network wait.
    pub fn complete_transition(&mut self) -> Result<Phase, SessionError> {
        self.state.promote()
    }

    /// Fire the stored intent (if the advance was a decision) and
    /// refill the look-ahead slot.
    ///
    /// Submission failures are reported in the [`Settlement`] and
    /// logged, never retried, and never roll back the session.
    pub async fn settle(&mut self) -> Settlement {
        let submission = match self.state.take_pending() {
            None => SubmissionOutcome::NotNeeded,
            Some(pending) => {
                let vote = SubmitVote {
                    matchup_id: pending.matchup_id,
                    winner_id: pending.winner_id,
                    user_id: self.user_id,
                };
                match self.client.submit_vote(&vote).await {
                    Ok(recorded) => SubmissionOutcome::Recorded(recorded),
                    Err(err) => {
                        tracing::warn!(
                            matchup_id = pending.matchup_id,
                            error = %err,
                            "Vote submission lost",
                        );
                        SubmissionOutcome::Lost(err)
                    }
                }
            }
        };

        let refilled = self.refill().await;

        Settlement {
            submission,
            refilled,
        }
    }

    /// Ask the matchmaker for a replacement and offer it to the state.
    /// A failed fetch is non-fatal; the slot stays empty for a later
    /// attempt.
    pub async fn refill(&mut self) -> bool {
        match self.client.next_matchup(self.user_id).await {
            Ok(matchup) => self.state.refill(matchup),
            Err(err) => {
                tracing::warn!(error = %err, "Look-ahead refill failed");
                false
            }
        }
    }

    /// Fetch the leaderboard and switch to the leaderboard view.
    /// On a failed fetch the phase is left untouched.
    pub async fn open_leaderboard(&mut self) -> Result<Leaderboard, ClientError> {
        let board = self.client.leaderboard(None, None).await?;
        self.state.open_leaderboard();
        Ok(board)
    }

    /// Return from the leaderboard view, resuming voting unless the
    /// pool emptied in the interim.
    pub fn close_leaderboard(&mut self) -> Phase {
        self.state.close_leaderboard()
    }
}
