//! Application controller.
//!
//! `TugOfWar` owns every piece of game state and is the only way to change
//! it. Front ends call its methods for calculator keys, roster setup, match
//! selection and clock ticks, then render from the returned events and
//! [`MatchView`] snapshots.
//!
//! ## Lifecycle
//!
//! ```text
//! Setup ──submit_setup / select_match──▶ InMatch ──edit_teams──▶ Setup
//! ```
//!
//! Inside a match the round runs `Active → Resolving → Active` until the rope
//! reaches an end and the round is `Ended`.

mod app;
mod view;

pub use app::{AppMode, TugOfWar, VictorySummary};
pub use view::{MatchView, SideView};
