//! Per-match points.

use serde::{Deserialize, Serialize};

use crate::core::{SideMap, TeamSide};

/// Correct answers per side in the current match.
///
/// Shown in the victory summary. Winning is decided by the rope, not by
/// these points.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchScore {
    points: SideMap<u32>,
}

impl MatchScore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one point for `side`.
    pub fn increment(&mut self, side: TeamSide) -> u32 {
        let points = &mut self.points[side];
        *points = points.saturating_add(1);
        *points
    }

    #[must_use]
    pub fn get(&self, side: TeamSide) -> u32 {
        self.points[side]
    }

    /// Zero both sides.
    pub fn reset(&mut self) {
        self.points = SideMap::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_reset() {
        let mut score = MatchScore::new();
        assert_eq!(score.increment(TeamSide::A), 1);
        assert_eq!(score.increment(TeamSide::A), 2);
        assert_eq!(score.increment(TeamSide::B), 1);

        assert_eq!(score.get(TeamSide::A), 2);
        assert_eq!(score.get(TeamSide::B), 1);

        score.reset();
        assert_eq!(score, MatchScore::new());
    }
}
