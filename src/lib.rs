//! # tarik-tambang
//!
//! Match engine for an arithmetic tug of war: two teams race to answer the
//! same problem on their calculators, every correct answer pulls the rope one
//! step their way, and the first team to drag it to their end wins the match.
//! A tournament layer tracks wins across matches.
//!
//! ## Design Principles
//!
//! 1. **One owner**: a single [`TugOfWar`] controller owns all state. There
//!    are no globals; front ends drive it through plain method calls.
//!
//! 2. **Caller-driven time**: the pause between problems is a deferred task
//!    on a clock the front end advances, so tests can jump time.
//!
//! 3. **Total input handling**: bad key presses are ignored, never errors.
//!    Only match selection and roster setup can be rejected.
//!
//! ## Modules
//!
//! - `core`: Team sides, RNG, configuration, errors
//! - `problem`: Arithmetic problem generation
//! - `round`: Round state machine and pending calculator input
//! - `rope`: Rope position, victory detection, match points
//! - `tournament`: Roster, win counts, current pairing
//! - `schedule`: Cancellable deferred tasks
//! - `events`: Match events and status text
//! - `controller`: The application controller and render snapshot

pub mod core;
pub mod problem;
pub mod round;
pub mod rope;
pub mod tournament;
pub mod schedule;
pub mod events;
pub mod controller;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    TeamSide, SideMap,
    GameRng, GameRngState,
    MatchConfig,
    ConfigError, InvalidSelection,
};

pub use crate::problem::{Operation, Problem, ProblemGenerator, ProblemSource};

pub use crate::round::{PendingInput, RoundPhase, RoundState};

pub use crate::rope::{MatchScore, RopeTracker};

pub use crate::tournament::{CurrentMatch, Standing, TournamentStandings};

pub use crate::schedule::{DeferredSlot, TaskId};

pub use crate::events::{MatchEvent, StatusMessage};

pub use crate::controller::{AppMode, MatchView, SideView, TugOfWar, VictorySummary};
