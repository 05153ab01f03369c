//! Core types: team sides, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. None of them know about
//! rounds, ropes or tournaments.

pub mod team;
pub mod rng;
pub mod config;
pub mod error;

pub use team::{ParseSideError, SideMap, TeamSide};
pub use rng::{GameRng, GameRngState};
pub use config::{MatchConfig, DEFAULT_TEAMS};
pub use error::{ConfigError, InvalidSelection};
