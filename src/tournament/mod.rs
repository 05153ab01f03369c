//! Tournament standings.
//!
//! A roster of 2-6 named teams with win counts that survive across matches
//! until the roster is configured again, plus the pairing for the current
//! match.

mod standings;

pub use standings::{CurrentMatch, Standing, TournamentStandings};
