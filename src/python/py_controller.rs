//! Controller bindings for Python.

use std::time::Duration;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::controller::TugOfWar;
use crate::core::{MatchConfig, TeamSide};
use crate::events::MatchEvent;

fn parse_side(side: &str) -> PyResult<TeamSide> {
    side.parse::<TeamSide>()
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

fn to_json(events: &[MatchEvent]) -> PyResult<String> {
    serde_json::to_string(events).map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

/// Python wrapper for the controller.
///
/// Sides are given as "a"/"blue" or "b"/"red". Methods that produce events
/// return them as a JSON array string.
#[pyclass(name = "TugOfWar")]
pub struct PyTugOfWar {
    inner: TugOfWar,
}

#[pymethods]
impl PyTugOfWar {
    /// Create a controller.
    ///
    /// # Arguments
    /// - seed: RNG seed for problem generation
    /// - config_json: optional JSON configuration overriding the defaults
    #[new]
    #[pyo3(signature = (seed = 42, config_json = None))]
    fn new(seed: u64, config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => MatchConfig::from_json(json),
            None => Ok(MatchConfig::default()),
        }
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;

        let inner = TugOfWar::new(config, seed)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        Ok(Self { inner })
    }

    fn submit_digit(&mut self, side: &str, digit: u8) -> PyResult<String> {
        let side = parse_side(side)?;
        to_json(&self.inner.submit_digit(side, digit))
    }

    fn backspace(&mut self, side: &str) -> PyResult<String> {
        let side = parse_side(side)?;
        to_json(&self.inner.backspace(side))
    }

    fn clear(&mut self, side: &str) -> PyResult<String> {
        let side = parse_side(side)?;
        to_json(&self.inner.clear(side))
    }

    /// Advance the clock by `millis` milliseconds.
    fn advance(&mut self, millis: u64) -> PyResult<String> {
        to_json(&self.inner.advance(Duration::from_millis(millis)))
    }

    /// Replace the roster and start a match. Raises ValueError on duplicates.
    fn submit_setup(&mut self, names: Vec<String>) -> PyResult<String> {
        let events = self
            .inner
            .submit_setup(&names)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        to_json(&events)
    }

    /// Start a match between two roster teams. Raises ValueError if invalid.
    fn select_match(&mut self, team_a: &str, team_b: &str) -> PyResult<String> {
        let events = self
            .inner
            .select_match(team_a, team_b)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        to_json(&events)
    }

    fn reset_match(&mut self) -> PyResult<String> {
        to_json(&self.inner.reset_match())
    }

    fn pause_match(&mut self) -> PyResult<String> {
        to_json(&self.inner.pause_match())
    }

    fn edit_teams(&mut self) -> PyResult<String> {
        to_json(&self.inner.edit_teams())
    }

    /// Dismiss the victory dialog. Returns (team, points) or None.
    fn acknowledge_victory(&mut self) -> Option<(String, u32)> {
        self.inner
            .acknowledge_victory()
            .map(|summary| (summary.team, summary.points))
    }

    fn question(&self) -> Option<String> {
        self.inner.current_problem().map(|p| p.question())
    }

    fn position(&self) -> i32 {
        self.inner.rope().position()
    }

    fn is_round_active(&self) -> bool {
        self.inner.is_round_active()
    }

    fn status(&self) -> String {
        self.inner.status().text.clone()
    }

    /// Standings as a list of (name, wins) in roster order.
    fn standings(&self) -> Vec<(String, u32)> {
        self.inner
            .standings()
            .standings()
            .into_iter()
            .map(|row| (row.name, row.wins))
            .collect()
    }

    /// Full render snapshot as JSON.
    fn view(&self) -> PyResult<String> {
        self.inner
            .view()
            .to_json()
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "TugOfWar({} vs {}, position={})",
            self.inner.team(TeamSide::A),
            self.inner.team(TeamSide::B),
            self.inner.rope().position()
        )
    }
}
