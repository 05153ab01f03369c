//! Match events.
//!
//! Every controller operation reports what happened as a list of events.
//! Front ends render from these (sounds, animations, the victory dialog)
//! without re-deriving anything from state.

use serde::{Deserialize, Serialize};

use crate::core::TeamSide;

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// The roster editor was opened; the match is paused.
    SetupOpened,

    /// A fresh match started between two teams.
    MatchStarted { team_a: String, team_b: String },

    /// A new problem was posted.
    RoundStarted { question: String },

    /// A team typed the correct answer.
    CorrectAnswer {
        side: TeamSide,
        team: String,
        /// Rope position after the pull.
        position: i32,
        /// The team's points after this answer.
        points: u32,
    },

    /// The rope reached a team's end.
    MatchWon {
        side: TeamSide,
        team: String,
        points: u32,
    },

    /// The round stopped accepting input without a winner.
    Paused,

    /// The victory summary was dismissed and the board cleared.
    VictoryAcknowledged {
        side: TeamSide,
        team: String,
        points: u32,
    },
}

impl MatchEvent {
    /// The side this event is about, if any.
    #[must_use]
    pub fn side(&self) -> Option<TeamSide> {
        match self {
            MatchEvent::CorrectAnswer { side, .. }
            | MatchEvent::MatchWon { side, .. }
            | MatchEvent::VictoryAcknowledged { side, .. } => Some(*side),
            _ => None,
        }
    }

    /// Whether this event ends a match.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        matches!(self, MatchEvent::MatchWon { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_side() {
        let event = MatchEvent::CorrectAnswer {
            side: TeamSide::B,
            team: "Tim Merah".into(),
            position: 1,
            points: 1,
        };
        assert_eq!(event.side(), Some(TeamSide::B));
        assert!(!event.is_victory());
        assert_eq!(MatchEvent::Paused.side(), None);
    }

    #[test]
    fn test_event_serialization() {
        let event = MatchEvent::MatchWon {
            side: TeamSide::A,
            team: "Tim Biru".into(),
            points: 4,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: MatchEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
        assert!(deserialized.is_victory());
    }
}
