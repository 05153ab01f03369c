//! Rope position and victory detection.

use serde::{Deserialize, Serialize};

use crate::core::TeamSide;

/// Signed rope displacement, bounded by `±max_displacement`.
///
/// Negative values mean side A is winning the pull, positive values side B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RopeTracker {
    position: i32,
    max_displacement: i32,
}

impl RopeTracker {
    /// Create a centered rope. `max_displacement` must be at least 1.
    #[must_use]
    pub fn new(max_displacement: i32) -> Self {
        Self {
            position: 0,
            max_displacement: max_displacement.max(1),
        }
    }

    #[must_use]
    pub fn position(&self) -> i32 {
        self.position
    }

    #[must_use]
    pub fn max_displacement(&self) -> i32 {
        self.max_displacement
    }

    /// Pull the rope one step toward `side`. Clamped at the ends.
    pub fn apply_correct_answer(&mut self, side: TeamSide) -> i32 {
        self.position = (self.position + side.pull_direction())
            .clamp(-self.max_displacement, self.max_displacement);
        self.position
    }

    /// The side whose end of the rope has been reached, if any.
    #[must_use]
    pub fn check_victory(&self) -> Option<TeamSide> {
        if self.position <= -self.max_displacement {
            Some(TeamSide::A)
        } else if self.position >= self.max_displacement {
            Some(TeamSide::B)
        } else {
            None
        }
    }

    /// The side currently ahead, or `None` at the center.
    #[must_use]
    pub fn leader(&self) -> Option<TeamSide> {
        match self.position.signum() {
            -1 => Some(TeamSide::A),
            1 => Some(TeamSide::B),
            _ => None,
        }
    }

    /// Marker offset from the center as a percentage of half the track
    /// (−50 at side A's end, +50 at side B's).
    #[must_use]
    pub fn marker_offset_percent(&self) -> f64 {
        f64::from(self.position) / f64::from(self.max_displacement) * 50.0
    }

    /// Fraction of the rope claimed by the leader, in `[0, 1]`.
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        (f64::from(self.position.abs()) / f64::from(self.max_displacement)).min(1.0)
    }

    /// Return to the center.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_toward_puller() {
        let mut rope = RopeTracker::new(4);

        assert_eq!(rope.apply_correct_answer(TeamSide::A), -1);
        assert_eq!(rope.apply_correct_answer(TeamSide::B), 0);
        assert_eq!(rope.apply_correct_answer(TeamSide::B), 1);
        assert_eq!(rope.leader(), Some(TeamSide::B));
    }

    #[test]
    fn test_clamped_at_ends() {
        let mut rope = RopeTracker::new(4);
        for _ in 0..10 {
            rope.apply_correct_answer(TeamSide::B);
        }
        assert_eq!(rope.position(), 4);

        for _ in 0..20 {
            rope.apply_correct_answer(TeamSide::A);
        }
        assert_eq!(rope.position(), -4);
    }

    #[test]
    fn test_victory_only_at_end() {
        let mut rope = RopeTracker::new(4);
        for _ in 0..3 {
            rope.apply_correct_answer(TeamSide::A);
            assert_eq!(rope.check_victory(), None);
        }
        rope.apply_correct_answer(TeamSide::A);
        assert_eq!(rope.check_victory(), Some(TeamSide::A));
    }

    #[test]
    fn test_presentation_ratios() {
        let mut rope = RopeTracker::new(4);
        assert_eq!(rope.marker_offset_percent(), 0.0);
        assert_eq!(rope.progress_ratio(), 0.0);
        assert_eq!(rope.leader(), None);

        rope.apply_correct_answer(TeamSide::A);
        rope.apply_correct_answer(TeamSide::A);
        assert_eq!(rope.marker_offset_percent(), -25.0);
        assert_eq!(rope.progress_ratio(), 0.5);
    }

    #[test]
    fn test_reset() {
        let mut rope = RopeTracker::new(4);
        rope.apply_correct_answer(TeamSide::B);
        rope.reset();
        assert_eq!(rope.position(), 0);
    }
}
