//! Render snapshot.

use serde::{Deserialize, Serialize};

use crate::core::TeamSide;
use crate::events::StatusMessage;
use crate::round::RoundPhase;
use crate::tournament::Standing;

use super::app::AppMode;

/// One side of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideView {
    pub side: TeamSide,
    pub team: String,
    /// Calculator display (`"0"` when empty).
    pub display: String,
    pub points: u32,
}

/// Everything a front end needs to draw the current screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchView {
    pub mode: AppMode,
    pub phase: RoundPhase,
    pub round_active: bool,
    pub question: Option<String>,
    pub position: i32,
    pub max_displacement: i32,
    pub marker_offset_percent: f64,
    pub progress_ratio: f64,
    /// Side A then side B.
    pub sides: [SideView; 2],
    pub standings: Vec<Standing>,
    pub status: StatusMessage,
}

impl MatchView {
    #[must_use]
    pub fn side(&self, side: TeamSide) -> &SideView {
        &self.sides[side.index()]
    }

    /// Serialize for a web or scripting front end.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
