//! Team sides and per-side data storage.
//!
//! ## TeamSide
//!
//! The two ends of the rope. Side `A` (blue) pulls toward negative
//! positions, side `B` (red) toward positive ones.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `TeamSide`, used for pending
//! calculator input and per-match points.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use thiserror::Error;

/// One end of the rope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    /// Blue team, left end of the rope.
    A,
    /// Red team, right end of the rope.
    B,
}

impl TeamSide {
    /// Both sides in display order (A first).
    pub const BOTH: [TeamSide; 2] = [TeamSide::A, TeamSide::B];

    /// Slot index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TeamSide::A => 0,
            TeamSide::B => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            TeamSide::A => TeamSide::B,
            TeamSide::B => TeamSide::A,
        }
    }

    /// Direction a correct answer moves the rope (-1 for A, +1 for B).
    #[must_use]
    pub const fn pull_direction(self) -> i32 {
        match self {
            TeamSide::A => -1,
            TeamSide::B => 1,
        }
    }

    /// Calculator color used by front ends.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            TeamSide::A => "blue",
            TeamSide::B => "red",
        }
    }
}

impl std::fmt::Display for TeamSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSide::A => write!(f, "Side A"),
            TeamSide::B => write!(f, "Side B"),
        }
    }
}

/// Error returned when text does not name a side.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown team side: {0:?} (expected a/b or blue/red)")]
pub struct ParseSideError(pub String);

impl FromStr for TeamSide {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "blue" => Ok(TeamSide::A),
            "b" | "red" => Ok(TeamSide::B),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use tarik_tambang::core::{SideMap, TeamSide};
///
/// let mut points: SideMap<u32> = SideMap::with_value(0);
/// points[TeamSide::B] += 2;
///
/// assert_eq!(points[TeamSide::A], 0);
/// assert_eq!(points[TeamSide::B], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(factory: impl Fn(TeamSide) -> T) -> Self {
        Self {
            data: [factory(TeamSide::A), factory(TeamSide::B)],
        }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: TeamSide) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: TeamSide) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (TeamSide, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TeamSide, &T)> {
        TeamSide::BOTH.into_iter().zip(self.data.iter())
    }

    /// Iterate over (TeamSide, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (TeamSide, &mut T)> {
        TeamSide::BOTH.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<TeamSide> for SideMap<T> {
    type Output = T;

    fn index(&self, side: TeamSide) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<TeamSide> for SideMap<T> {
    fn index_mut(&mut self, side: TeamSide) -> &mut Self::Output {
        self.get_mut(side)
    }
}
