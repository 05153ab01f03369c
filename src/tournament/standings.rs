//! Tournament roster, win counts and the current pairing.

use im::Vector;
use log::{info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, InvalidSelection, MatchConfig, SideMap, TeamSide};

/// The two teams playing the current match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrentMatch {
    teams: SideMap<String>,
}

impl CurrentMatch {
    fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        Self {
            teams: SideMap::new(|side| match side {
                TeamSide::A => a.clone(),
                TeamSide::B => b.clone(),
            }),
        }
    }

    /// Name of the team on `side`.
    #[must_use]
    pub fn team(&self, side: TeamSide) -> &str {
        &self.teams[side]
    }
}

/// One row of the standings table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub wins: u32,
}

/// Tournament roster and win counts.
///
/// The roster is an `im::Vector` so views can snapshot it without copying.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentStandings {
    teams: Vector<String>,
    wins: FxHashMap<String, u32>,
    current: CurrentMatch,
    min_teams: usize,
    max_teams: usize,
}

impl TournamentStandings {
    /// Create standings from the configured default roster.
    pub fn new(config: &MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut standings = Self {
            teams: Vector::new(),
            wins: FxHashMap::default(),
            current: CurrentMatch::new("", ""),
            min_teams: config.min_teams,
            max_teams: config.max_teams,
        };
        standings.configure(&config.default_teams)?;
        Ok(standings)
    }

    /// Clamp a requested roster size into the configured limits.
    #[must_use]
    pub fn clamp_team_count(&self, count: usize) -> usize {
        count.clamp(self.min_teams, self.max_teams)
    }

    /// Replace the roster and reset every win count to zero.
    ///
    /// Names are trimmed and blank names become `"Tim {n}"`. The roster is
    /// truncated or padded with `"Tim {n}"` to fit the team limits. The
    /// current match becomes the first two teams. A duplicate name after
    /// normalization rejects the whole call and leaves state unchanged.
    pub fn configure<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), ConfigError> {
        let count = self.clamp_team_count(names.len()).max(2);
        let teams: Vector<String> = (0..count)
            .map(|i| {
                let name = names.get(i).map(|n| n.as_ref().trim()).unwrap_or_default();
                if name.is_empty() {
                    format!("Tim {}", i + 1)
                } else {
                    name.to_string()
                }
            })
            .collect();

        for (i, name) in teams.iter().enumerate() {
            if teams.iter().skip(i + 1).any(|other| other == name) {
                warn!("rejected roster with duplicate team {name:?}");
                return Err(ConfigError::DuplicateTeam(name.clone()));
            }
        }

        self.wins = teams.iter().map(|name| (name.clone(), 0)).collect();
        self.current = CurrentMatch::new(teams[0].clone(), teams[1].clone());
        info!("tournament configured with {} teams", teams.len());
        self.teams = teams;
        Ok(())
    }

    /// Add a win for `name`. Unknown names are ignored (returns false).
    pub fn record_win(&mut self, name: &str) -> bool {
        match self.wins.get_mut(name) {
            Some(wins) => {
                *wins += 1;
                info!("{name} now has {wins} wins");
                true
            }
            None => {
                warn!("ignored win for unknown team {name:?}");
                false
            }
        }
    }

    /// Choose the teams for the next match.
    ///
    /// Both names must be non-empty, different, and on the roster.
    pub fn select_match(&mut self, a: &str, b: &str) -> Result<(), InvalidSelection> {
        if a.is_empty() || b.is_empty() {
            return Err(InvalidSelection::EmptyName);
        }
        if a == b {
            return Err(InvalidSelection::SameTeam(a.to_string()));
        }
        for name in [a, b] {
            if !self.wins.contains_key(name) {
                return Err(InvalidSelection::UnknownTeam(name.to_string()));
            }
        }
        self.current = CurrentMatch::new(a, b);
        Ok(())
    }

    #[must_use]
    pub fn teams(&self) -> &Vector<String> {
        &self.teams
    }

    /// Wins for `name` (0 for unknown names).
    #[must_use]
    pub fn wins(&self, name: &str) -> u32 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn current_match(&self) -> &CurrentMatch {
        &self.current
    }

    /// Standings in roster order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.teams
            .iter()
            .map(|name| Standing {
                name: name.clone(),
                wins: self.wins(name),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings() -> TournamentStandings {
        TournamentStandings::new(&MatchConfig::default()).unwrap()
    }

    #[test]
    fn test_default_roster() {
        let s = standings();
        assert_eq!(s.teams().len(), 2);
        assert_eq!(s.current_match().team(TeamSide::A), "Tim Biru");
        assert_eq!(s.current_match().team(TeamSide::B), "Tim Merah");
        assert_eq!(s.wins("Tim Biru"), 0);
    }

    #[test]
    fn test_configure_resets_wins() {
        let mut s = standings();
        s.record_win("Tim Biru");
        s.configure(&["Tim Biru", "Elang", "Harimau"]).unwrap();

        assert_eq!(s.wins("Tim Biru"), 0);
        assert_eq!(s.teams().len(), 3);
        assert_eq!(s.current_match().team(TeamSide::B), "Elang");
    }

    #[test]
    fn test_configure_drops_missing_names() {
        let mut s = standings();
        s.record_win("Tim Merah");
        s.configure(&["A", "B"]).unwrap();

        assert!(!s.record_win("Tim Merah"));
        assert!(s.standings().iter().all(|row| row.name != "Tim Merah"));
    }

    #[test]
    fn test_configure_fills_blank_names() {
        let mut s = standings();
        s.configure(&["  Elang ", "", "   "]).unwrap();

        let names: Vec<_> = s.teams().iter().cloned().collect();
        assert_eq!(names, vec!["Elang", "Tim 2", "Tim 3"]);
    }

    #[test]
    fn test_configure_clamps_count() {
        let mut s = standings();
        s.configure(&["Solo"]).unwrap();
        let names: Vec<_> = s.teams().iter().cloned().collect();
        assert_eq!(names, vec!["Solo", "Tim 2"]);

        let many: Vec<String> = (1..=9).map(|i| format!("Team {i}")).collect();
        s.configure(&many).unwrap();
        assert_eq!(s.teams().len(), 6);
        assert_eq!(s.teams().back().map(String::as_str), Some("Team 6"));
    }

    #[test]
    fn test_configure_rejects_duplicates() {
        let mut s = standings();
        s.record_win("Tim Biru");

        let err = s.configure(&["Elang", " Elang"]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateTeam(name) if name == "Elang"));

        // Unchanged
        assert_eq!(s.wins("Tim Biru"), 1);
        assert_eq!(s.teams().len(), 2);
    }

    #[test]
    fn test_select_match_errors() {
        let mut s = standings();
        s.configure(&["A", "B", "C"]).unwrap();

        assert_eq!(s.select_match("", "B"), Err(InvalidSelection::EmptyName));
        assert_eq!(s.select_match("B", "B"), Err(InvalidSelection::SameTeam("B".into())));
        assert_eq!(s.select_match("B", "Z"), Err(InvalidSelection::UnknownTeam("Z".into())));
        assert_eq!(s.current_match().team(TeamSide::A), "A");
        assert_eq!(s.current_match().team(TeamSide::B), "B");

        s.select_match("C", "A").unwrap();
        assert_eq!(s.current_match().team(TeamSide::A), "C");
        assert_eq!(s.current_match().team(TeamSide::B), "A");
    }

    #[test]
    fn test_standings_order() {
        let mut s = standings();
        s.configure(&["C", "A", "B"]).unwrap();
        s.record_win("B");
        s.record_win("B");

        let rows = s.standings();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert_eq!(rows[2].wins, 2);
    }
}
