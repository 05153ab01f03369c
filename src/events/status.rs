//! Status line text.
//!
//! Fixed table from events to the Indonesian messages shown under the
//! question. Highlighted messages are rendered emphasized.

use serde::{Deserialize, Serialize};

use super::event::MatchEvent;

/// A status line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub text: String,
    pub highlight: bool,
}

impl StatusMessage {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: false,
        }
    }

    fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: true,
        }
    }

    /// Shown before the first setup.
    #[must_use]
    pub fn initial() -> Self {
        Self::plain("Silakan atur tim dulu untuk memulai.")
    }

    /// Shown after a rejected action.
    #[must_use]
    pub fn rejected(text: impl Into<String>) -> Self {
        Self::plain(text)
    }

    /// Status for an event, or `None` when the event leaves the line as is.
    #[must_use]
    pub fn for_event(event: &MatchEvent) -> Option<Self> {
        match event {
            MatchEvent::SetupOpened => Some(Self::plain(
                "Mengatur tim... berikutnya mulai pertandingan.",
            )),
            MatchEvent::MatchStarted { .. } => Some(Self::plain(
                "Pertandingan dimulai! Jawab dengan cepat agar tali bergerak.",
            )),
            MatchEvent::RoundStarted { .. } => Some(Self::plain(
                "Jawab dengan cepat menggunakan kalkulator untuk menarik tambang!",
            )),
            MatchEvent::CorrectAnswer { team, .. } => {
                Some(Self::highlighted(format!("{team} menjawab dengan benar!")))
            }
            MatchEvent::VictoryAcknowledged { team, points, .. } => Some(Self::highlighted(
                format!("{team} memenangkan pertandingan dengan {points} poin!"),
            )),
            MatchEvent::MatchWon { .. } | MatchEvent::Paused => None,
        }
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
