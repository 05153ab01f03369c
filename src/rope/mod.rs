//! The rope and the match scoreboard.
//!
//! Each correct answer moves the rope one step toward the answering team and
//! adds a point to its score. The match is won when the rope reaches either
//! end; points are only reported.

mod scoreboard;
mod tracker;

pub use scoreboard::MatchScore;
pub use tracker::RopeTracker;
