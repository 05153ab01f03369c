//! Match configuration.
//!
//! `MatchConfig` gathers every tunable of a match: rope length, calculator
//! width, the pause between problems and the tournament roster limits.
//! Front ends build one with the `with_*` methods or load a partial JSON
//! document over the defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default roster shown before the first setup.
pub const DEFAULT_TEAMS: [&str; 2] = ["Tim Biru", "Tim Merah"];

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Steps from the center to either end of the rope.
    pub max_displacement: i32,

    /// Maximum digits a team can type into its calculator.
    pub max_input_digits: usize,

    /// Pause after a correct, non-winning answer before the next problem.
    pub next_problem_delay_ms: u64,

    /// Smallest tournament roster.
    pub min_teams: usize,

    /// Largest tournament roster.
    pub max_teams: usize,

    /// Roster used before setup is submitted.
    pub default_teams: Vec<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_displacement: 4,
            max_input_digits: 3,
            next_problem_delay_ms: 800,
            min_teams: 2,
            max_teams: 6,
            default_teams: DEFAULT_TEAMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the rope half-length.
    #[must_use]
    pub fn with_max_displacement(mut self, steps: i32) -> Self {
        self.max_displacement = steps;
        self
    }

    /// Set the calculator width.
    #[must_use]
    pub fn with_max_input_digits(mut self, digits: usize) -> Self {
        self.max_input_digits = digits;
        self
    }

    /// Set the pause between problems.
    #[must_use]
    pub fn with_next_problem_delay(mut self, delay: Duration) -> Self {
        self.next_problem_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the roster size limits.
    #[must_use]
    pub fn with_team_limits(mut self, min: usize, max: usize) -> Self {
        self.min_teams = min;
        self.max_teams = max;
        self
    }

    /// Set the initial roster.
    #[must_use]
    pub fn with_default_teams<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_teams = names.into_iter().map(Into::into).collect();
        self
    }

    /// Pause between problems as a `Duration`.
    #[must_use]
    pub fn next_problem_delay(&self) -> Duration {
        Duration::from_millis(self.next_problem_delay_ms)
    }

    /// Clamp a requested roster size into the configured limits.
    #[must_use]
    pub fn clamp_team_count(&self, count: usize) -> usize {
        count.clamp(self.min_teams, self.max_teams)
    }

    /// Check the configuration for values no match can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_displacement < 1 {
            return Err(ConfigError::Invalid(format!(
                "max_displacement must be at least 1, got {}",
                self.max_displacement
            )));
        }
        if self.max_input_digits == 0 {
            return Err(ConfigError::Invalid(
                "max_input_digits must be at least 1".to_string(),
            ));
        }
        if self.min_teams < 2 {
            return Err(ConfigError::Invalid(format!(
                "min_teams must be at least 2, got {}",
                self.min_teams
            )));
        }
        if self.min_teams > self.max_teams {
            return Err(ConfigError::Invalid(format!(
                "min_teams ({}) exceeds max_teams ({})",
                self.min_teams, self.max_teams
            )));
        }
        Ok(())
    }
}
