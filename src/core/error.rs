//! Error types.
//!
//! Only two kinds of action can be rejected: choosing the teams for a match
//! and configuring the tournament. Every other operation is total and treats
//! bad input as a no-op. A rejected action never changes state.

use thiserror::Error;

/// A match could not be started with the chosen teams.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidSelection {
    #[error("team name is empty")]
    EmptyName,

    #[error("both sides selected the same team: {0}")]
    SameTeam(String),

    #[error("team is not in the tournament roster: {0}")]
    UnknownTeam(String),
}

impl InvalidSelection {
    /// Status line shown to players for this rejection.
    #[must_use]
    pub fn status_message(&self) -> &'static str {
        match self {
            InvalidSelection::EmptyName | InvalidSelection::UnknownTeam(_) => {
                "Lengkapi nama tim dulu."
            }
            InvalidSelection::SameTeam(_) => "Pilih dua tim berbeda.",
        }
    }
}

/// Configuration or roster setup failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("duplicate team name: {0}")]
    DuplicateTeam(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_messages() {
        assert_eq!(InvalidSelection::EmptyName.status_message(), "Lengkapi nama tim dulu.");
        assert_eq!(
            InvalidSelection::SameTeam("Tim Biru".into()).status_message(),
            "Pilih dua tim berbeda."
        );
    }

    #[test]
    fn test_display() {
        let err = InvalidSelection::SameTeam("Tim Biru".into());
        assert_eq!(err.to_string(), "both sides selected the same team: Tim Biru");

        let err = ConfigError::DuplicateTeam("Tim 1".into());
        assert_eq!(err.to_string(), "duplicate team name: Tim 1");
    }
}
