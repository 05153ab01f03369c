//! Rounds: one posted problem and both teams' pending calculator input.
//!
//! A round opens when a problem is posted and closes when either team types
//! the exact answer. The state machine only tracks input and validation;
//! moving the rope and scoring belong to the controller.

mod input;
mod machine;

pub use input::PendingInput;
pub use machine::{RoundPhase, RoundState};
