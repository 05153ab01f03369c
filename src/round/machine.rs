//! Round state machine.
//!
//! ```text
//! Inactive ──start──▶ Active ──correct answer──▶ Resolving ──start──▶ Active
//!                                                    │
//!                                                    └──end──▶ Ended
//! ```
//!
//! `pause` returns to `Inactive` from anywhere. Input is only accepted
//! while `Active`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{SideMap, TeamSide};
use crate::problem::Problem;

use super::input::PendingInput;

/// Where the current round is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round running (setup, paused, or before the first match).
    #[default]
    Inactive,
    /// A problem is posted and input is accepted.
    Active,
    /// A correct answer was given; waiting for the next problem.
    Resolving,
    /// The match was won.
    Ended,
}

/// State of the round in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    phase: RoundPhase,
    problem: Option<Problem>,
    inputs: SideMap<PendingInput>,
    max_digits: usize,
}

impl RoundState {
    /// Create an inactive round with the given calculator width.
    #[must_use]
    pub fn new(max_digits: usize) -> Self {
        Self {
            phase: RoundPhase::Inactive,
            problem: None,
            inputs: SideMap::default(),
            max_digits,
        }
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Whether input is currently accepted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    #[must_use]
    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }

    #[must_use]
    pub fn input(&self, side: TeamSide) -> &PendingInput {
        &self.inputs[side]
    }

    /// Post a new problem and open the round for input.
    ///
    /// Clears both teams' pending input.
    pub fn start(&mut self, problem: Problem) {
        debug!("round started: {}", problem);
        self.clear_inputs();
        self.problem = Some(problem);
        self.phase = RoundPhase::Active;
    }

    /// Append a digit to a team's input. Ignored unless the round is active.
    pub fn submit_digit(&mut self, side: TeamSide, digit: u8) -> bool {
        if !self.is_active() {
            return false;
        }
        self.inputs[side].push_digit(digit, self.max_digits)
    }

    /// Remove a team's last digit. Ignored unless the round is active.
    pub fn backspace(&mut self, side: TeamSide) -> bool {
        self.is_active() && self.inputs[side].backspace()
    }

    /// Empty a team's input. Ignored unless the round is active.
    pub fn clear(&mut self, side: TeamSide) -> bool {
        if !self.is_active() {
            return false;
        }
        self.inputs[side].clear();
        true
    }

    /// Compare a team's input against the answer.
    ///
    /// Only evaluated while active with non-empty input. On an exact match
    /// the round moves to `Resolving` and this returns true.
    pub fn check_answer(&mut self, side: TeamSide) -> bool {
        if !self.is_active() {
            return false;
        }
        let (Some(problem), Some(value)) = (&self.problem, self.inputs[side].value()) else {
            return false;
        };
        if value != i64::from(problem.answer) {
            return false;
        }
        debug!("{} answered {} correctly", side, value);
        self.phase = RoundPhase::Resolving;
        true
    }

    /// Close the round after a victory.
    pub fn end(&mut self) {
        self.phase = RoundPhase::Ended;
    }

    /// Stop accepting input without ending the match.
    pub fn pause(&mut self) {
        self.phase = RoundPhase::Inactive;
    }

    /// Empty both teams' input.
    pub fn clear_inputs(&mut self) {
        for (_, input) in self.inputs.iter_mut() {
            input.clear();
        }
    }
}
