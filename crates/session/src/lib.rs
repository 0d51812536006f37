//! Client-resident voting session: an explicit state machine over
//! `loading / playing / empty / leaderboard`, a single-slot look-ahead
//! buffer, and the deferred-commit handoff that lets the UI advance
//! before the network confirms a vote.
//!
//! The split mirrors the server crates' separation of pure logic from
//! I/O: [`phase`] and [`state`] are synchronous and fully testable
//! without a network; [`controller`] owns the async join points and
//! talks to the backend through the [`client::ArenaClient`] seam.

pub mod client;
pub mod controller;
pub mod error;
pub mod phase;
pub mod state;

pub use client::{ArenaClient, ClientError, HttpArenaClient};
pub use controller::{SessionController, Settlement, SubmissionOutcome};
pub use error::SessionError;
pub use phase::Phase;
pub use state::{PendingVote, SessionState, SessionStats};
