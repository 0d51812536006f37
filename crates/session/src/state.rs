//! The synchronous half of the session: phase, slots, counters, and
//! the deferred-commit handoff. No I/O happens here.

use filmduel_core::types::DbId;
use filmduel_db::models::matchup::Matchup;

use crate::error::SessionError;
use crate::phase::Phase;

/// Ephemeral per-session counters. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub judged: u32,
    pub skipped: u32,
}

/// A decision captured at tap time, held outside the reactive state
/// until the exit transition finishes and the network submit fires.
///
/// Keeping this an explicit field (rather than an out-of-band mutable
/// reference) makes the handoff visible and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingVote {
    pub matchup_id: DbId,
    pub winner_id: DbId,
}

/// What kind of advance is between "user acted" and "transition done".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Advance {
    Judged,
    Skipped,
}

/// Full client-side session state.
#[derive(Debug)]
pub struct SessionState {
    phase: Phase,
    current: Option<Matchup>,
    /// Single-slot look-ahead buffer, prefetched in the background so
    /// the next matchup is ready before the user finishes this one.
    next: Option<Matchup>,
    pending: Option<PendingVote>,
    advance: Option<Advance>,
    stats: SessionStats,
    /// UX guard against overlapping skip/commit taps during a
    /// transition. Not a correctness mechanism.
    input_locked: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            current: None,
            next: None,
            pending: None,
            advance: None,
            stats: SessionStats::default(),
            input_locked: false,
        }
    }

    // -- accessors --

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> Option<&Matchup> {
        self.current.as_ref()
    }

    pub fn next(&self) -> Option<&Matchup> {
        self.next.as_ref()
    }

    pub fn pending(&self) -> Option<&PendingVote> {
        self.pending.as_ref()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn input_locked(&self) -> bool {
        self.input_locked
    }

    // -- transitions --

    /// Leave `Loading` with the results of the initial fetches.
    pub fn begin(&mut self, current: Option<Matchup>, next: Option<Matchup>) -> Phase {
        self.phase = Phase::after_load(current.is_some());
        self.current = current;
        self.next = next;
        self.phase
    }

    /// Capture the user's decision for the current matchup.
    ///
    /// Happens synchronously at tap time, before any exit transition
    /// plays; the intent sits in `pending` until [`Self::take_pending`].
    /// Locks input until the promote completes.
    pub fn decide(&mut self, winner_id: DbId) -> Result<(), SessionError> {
        let current = self.playable()?;
        if !current.has_side(winner_id) {
            return Err(SessionError::InvalidWinner { winner_id });
        }
        let matchup_id = current.id;
        self.pending = Some(PendingVote {
            matchup_id,
            winner_id,
        });
        self.advance = Some(Advance::Judged);
        self.input_locked = true;
        Ok(())
    }

    /// Start skipping the current matchup. Same advance mechanics as a
    /// decision, but nothing will be submitted and nothing persists:
    /// a skipped matchup may be re-offered in a later session.
    pub fn begin_skip(&mut self) -> Result<(), SessionError> {
        self.playable()?;
        self.advance = Some(Advance::Skipped);
        self.input_locked = true;
        Ok(())
    }

    /// Complete the exit transition: promote the look-ahead slot into
    /// `current`, bump the matching counter, and unlock input.
    ///
    /// Purely synchronous — the session counts the judgment here, with
    /// no network wait, even though the submission may later fail.
    /// Lands in `Empty` when the look-ahead slot was empty.
    pub fn promote(&mut self) -> Result<Phase, SessionError> {
        let advance = self.advance.take().ok_or(SessionError::NoAdvanceInFlight)?;
        match advance {
            Advance::Judged => self.stats.judged += 1,
            Advance::Skipped => self.stats.skipped += 1,
        }
        self.current = self.next.take();
        self.input_locked = false;
        self.phase = Phase::after_promote(self.current.is_some());
        Ok(self.phase)
    }

    /// Take the stored intent for submission. The visual state has
    /// already advanced; whatever happens to the submission, nothing
    /// here is rolled back.
    pub fn take_pending(&mut self) -> Option<PendingVote> {
        self.pending.take()
    }

    /// Offer a fetched matchup to the state.
    ///
    /// Fills `current` first (returning the session to `Playing` when
    /// it was `Empty`), then the look-ahead slot. A matchup already
    /// held in either slot is dropped — the server may hand the same
    /// eligible matchup to both background fetches before a vote for
    /// it exists. Returns whether the matchup was kept.
    pub fn refill(&mut self, matchup: Option<Matchup>) -> bool {
        let Some(matchup) = matchup else {
            return false;
        };
        let held = |slot: &Option<Matchup>| slot.as_ref().is_some_and(|m| m.id == matchup.id);
        if held(&self.current) || held(&self.next) {
            return false;
        }

        if self.current.is_none() {
            self.current = Some(matchup);
            if self.phase == Phase::Empty {
                self.phase = Phase::Playing;
            }
            true
        } else if self.next.is_none() {
            self.next = Some(matchup);
            true
        } else {
            false
        }
    }

    /// Switch to the leaderboard view. `current`/`next` are kept so
    /// returning resumes exactly where voting left off.
    pub fn open_leaderboard(&mut self) -> Phase {
        self.phase = Phase::Leaderboard;
        self.phase
    }

    /// Return from the leaderboard view.
    pub fn close_leaderboard(&mut self) -> Phase {
        self.phase = Phase::after_leaderboard(self.current.is_some());
        self.phase
    }

    /// The current matchup, if the session accepts input right now.
    fn playable(&self) -> Result<&Matchup, SessionError> {
        if self.phase != Phase::Playing {
            return Err(SessionError::NotPlaying(self.phase));
        }
        if self.input_locked {
            return Err(SessionError::InputLocked);
        }
        self.current
            .as_ref()
            .ok_or(SessionError::NotPlaying(self.phase))
    }
}
