//! The application controller.

use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, InvalidSelection, MatchConfig, TeamSide};
use crate::events::{MatchEvent, StatusMessage};
use crate::problem::{Problem, ProblemGenerator, ProblemSource};
use crate::rope::{MatchScore, RopeTracker};
use crate::round::{RoundPhase, RoundState};
use crate::schedule::DeferredSlot;
use crate::tournament::TournamentStandings;

use super::view::{MatchView, SideView};

/// Which screen the application is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppMode {
    /// Editing the tournament roster.
    #[default]
    Setup,
    /// Playing a match.
    InMatch,
}

/// Work the controller defers until the clock catches up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deferred {
    NextRound,
}

/// What the victory dialog shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictorySummary {
    pub side: TeamSide,
    pub team: String,
    pub points: u32,
}

/// Owns the whole game: tournament, current match, round and clock.
///
/// Every input is a method call returning the events it produced. Time only
/// moves through [`TugOfWar::advance`].
///
/// ```
/// use std::time::Duration;
/// use tarik_tambang::controller::{AppMode, TugOfWar};
/// use tarik_tambang::core::{MatchConfig, TeamSide};
///
/// let mut game = TugOfWar::new(MatchConfig::default(), 42).unwrap();
/// assert_eq!(game.mode(), AppMode::Setup);
///
/// game.submit_setup(&["Tim Biru", "Tim Merah"]).unwrap();
/// assert!(game.is_round_active());
///
/// let answer = game.current_problem().unwrap().answer;
/// for digit in answer.to_string().bytes().map(|b| b - b'0') {
///     game.submit_digit(TeamSide::A, digit);
/// }
/// assert_eq!(game.rope().position(), -1);
///
/// game.advance(Duration::from_millis(800));
/// assert!(game.is_round_active());
/// ```
#[derive(Clone, Debug)]
pub struct TugOfWar<S = ProblemGenerator> {
    config: MatchConfig,
    mode: AppMode,
    round: RoundState,
    rope: RopeTracker,
    score: MatchScore,
    standings: TournamentStandings,
    source: S,
    clock: Duration,
    next_round: DeferredSlot<Deferred>,
    last_winner: Option<TeamSide>,
    status: StatusMessage,
}

impl TugOfWar<ProblemGenerator> {
    /// Create a controller with random problems from `seed`.
    pub fn new(config: MatchConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(config, ProblemGenerator::new(seed))
    }
}

impl<S: ProblemSource> TugOfWar<S> {
    /// Create a controller drawing problems from `source`.
    ///
    /// Starts on the setup screen with the configured default roster.
    pub fn with_source(config: MatchConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let standings = TournamentStandings::new(&config)?;
        Ok(Self {
            round: RoundState::new(config.max_input_digits),
            rope: RopeTracker::new(config.max_displacement),
            score: MatchScore::new(),
            standings,
            source,
            clock: Duration::ZERO,
            next_round: DeferredSlot::new(),
            last_winner: None,
            status: StatusMessage::initial(),
            mode: AppMode::Setup,
            config,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn rope(&self) -> &RopeTracker {
        &self.rope
    }

    #[must_use]
    pub fn score(&self) -> &MatchScore {
        &self.score
    }

    #[must_use]
    pub fn standings(&self) -> &TournamentStandings {
        &self.standings
    }

    #[must_use]
    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    #[must_use]
    pub fn current_problem(&self) -> Option<&Problem> {
        self.round.problem()
    }

    #[must_use]
    pub fn is_round_active(&self) -> bool {
        self.round.is_active()
    }

    /// Team name playing on `side` in the current match.
    #[must_use]
    pub fn team(&self, side: TeamSide) -> &str {
        self.standings.current_match().team(side)
    }

    /// Winner of the finished match whose summary has not been dismissed.
    #[must_use]
    pub fn last_winner(&self) -> Option<TeamSide> {
        self.last_winner
    }

    /// Time elapsed on the controller clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock
    }

    /// Whether the next problem is waiting on the clock.
    #[must_use]
    pub fn has_pending_round(&self) -> bool {
        self.next_round.is_pending()
    }

    // === Calculator input ===

    /// Type a digit on `side`'s calculator, then check the answer.
    pub fn submit_digit(&mut self, side: TeamSide, digit: u8) -> Vec<MatchEvent> {
        if !self.round.submit_digit(side, digit) {
            return Vec::new();
        }
        self.check_answer(side)
    }

    /// Delete the last digit on `side`'s calculator, then check the answer.
    pub fn backspace(&mut self, side: TeamSide) -> Vec<MatchEvent> {
        if !self.round.backspace(side) {
            return Vec::new();
        }
        self.check_answer(side)
    }

    /// Clear `side`'s calculator.
    pub fn clear(&mut self, side: TeamSide) -> Vec<MatchEvent> {
        self.round.clear(side);
        Vec::new()
    }

    /// Compare `side`'s input with the answer and apply a correct one.
    pub fn check_answer(&mut self, side: TeamSide) -> Vec<MatchEvent> {
        if !self.round.check_answer(side) {
            return Vec::new();
        }
        let events = self.apply_correct_answer(side);
        self.publish(events)
    }

    fn apply_correct_answer(&mut self, side: TeamSide) -> Vec<MatchEvent> {
        let points = self.score.increment(side);
        let position = self.rope.apply_correct_answer(side);
        let mut events = vec![MatchEvent::CorrectAnswer {
            side,
            team: self.team(side).to_string(),
            position,
            points,
        }];

        match self.rope.check_victory() {
            Some(winner) => {
                self.next_round.cancel();
                self.round.end();
                let team = self.team(winner).to_string();
                self.standings.record_win(&team);
                self.last_winner = Some(winner);
                info!("{team} won the match at position {position}");
                events.push(MatchEvent::MatchWon {
                    side: winner,
                    points: self.score.get(winner),
                    team,
                });
            }
            None => {
                self.next_round.schedule(
                    Deferred::NextRound,
                    self.clock,
                    self.config.next_problem_delay(),
                );
            }
        }
        events
    }

    // === Clock ===

    /// Move the clock forward and run whatever became due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<MatchEvent> {
        self.clock = self.clock.saturating_add(elapsed);
        match self.next_round.poll(self.clock) {
            Some(Deferred::NextRound) => {
                let events = self.start_round();
                self.publish(events)
            }
            None => Vec::new(),
        }
    }

    // === Match lifecycle ===

    /// Start a fresh match between the current teams.
    ///
    /// Rope centered, scores zeroed, pending problem cancelled, new problem
    /// posted.
    pub fn reset_match(&mut self) -> Vec<MatchEvent> {
        let events = self.restart();
        self.publish(events)
    }

    /// Stop accepting input and cancel the pending problem.
    pub fn pause_match(&mut self) -> Vec<MatchEvent> {
        let events = self.pause();
        self.publish(events)
    }

    /// Return to the roster editor. Standings are kept.
    pub fn edit_teams(&mut self) -> Vec<MatchEvent> {
        self.mode = AppMode::Setup;
        let mut events = self.pause();
        events.push(MatchEvent::SetupOpened);
        self.publish(events)
    }

    /// Replace the roster, reset all wins and start a match between the
    /// first two teams.
    pub fn submit_setup<N: AsRef<str>>(&mut self, names: &[N]) -> Result<Vec<MatchEvent>, ConfigError> {
        self.standings.configure(names)?;
        Ok(self.reset_match())
    }

    /// Pick the two teams and start a match between them.
    ///
    /// On rejection only the status line changes.
    pub fn select_match(&mut self, team_a: &str, team_b: &str) -> Result<Vec<MatchEvent>, InvalidSelection> {
        if let Err(err) = self.standings.select_match(team_a, team_b) {
            warn!("rejected match selection: {err}");
            self.status = StatusMessage::rejected(err.status_message());
            return Err(err);
        }
        Ok(self.reset_match())
    }

    /// Dismiss the victory dialog.
    ///
    /// Returns the summary of the recorded winner and clears the board for
    /// the next match. Without a recorded winner nothing happens.
    pub fn acknowledge_victory(&mut self) -> Option<VictorySummary> {
        let side = self.last_winner.take()?;
        let summary = VictorySummary {
            side,
            team: self.team(side).to_string(),
            points: self.score.get(side),
        };
        self.score.reset();
        self.rope.reset();
        self.publish(vec![MatchEvent::VictoryAcknowledged {
            side: summary.side,
            team: summary.team.clone(),
            points: summary.points,
        }]);
        Some(summary)
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> MatchView {
        MatchView {
            mode: self.mode,
            phase: self.round.phase(),
            round_active: self.round.is_active(),
            question: self.round.problem().map(Problem::question),
            position: self.rope.position(),
            max_displacement: self.rope.max_displacement(),
            marker_offset_percent: self.rope.marker_offset_percent(),
            progress_ratio: self.rope.progress_ratio(),
            sides: TeamSide::BOTH.map(|side| SideView {
                side,
                team: self.team(side).to_string(),
                display: self.round.input(side).display().to_string(),
                points: self.score.get(side),
            }),
            standings: self.standings.standings(),
            status: self.status.clone(),
        }
    }

    // === Internals ===

    fn restart(&mut self) -> Vec<MatchEvent> {
        self.mode = AppMode::InMatch;
        self.next_round.cancel();
        self.rope.reset();
        self.score.reset();
        self.last_winner = None;

        let mut events = vec![MatchEvent::MatchStarted {
            team_a: self.team(TeamSide::A).to_string(),
            team_b: self.team(TeamSide::B).to_string(),
        }];
        info!("match started: {} vs {}", self.team(TeamSide::A), self.team(TeamSide::B));
        events.extend(self.start_round());
        events
    }

    fn start_round(&mut self) -> Vec<MatchEvent> {
        self.next_round.cancel();
        let problem = self.source.next_problem();
        let question = problem.question();
        self.round.start(problem);
        vec![MatchEvent::RoundStarted { question }]
    }

    fn pause(&mut self) -> Vec<MatchEvent> {
        self.next_round.cancel();
        let was_running = matches!(self.round.phase(), RoundPhase::Active | RoundPhase::Resolving);
        self.round.pause();
        if was_running {
            debug!("round paused");
            vec![MatchEvent::Paused]
        } else {
            Vec::new()
        }
    }

    fn publish(&mut self, events: Vec<MatchEvent>) -> Vec<MatchEvent> {
        for event in &events {
            if let Some(status) = StatusMessage::for_event(event) {
                self.status = status;
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Operation;

    /// Always poses 6 × 7.
    struct FortyTwo;

    impl ProblemSource for FortyTwo {
        fn next_problem(&mut self) -> Problem {
            Problem::from_operands(Operation::Multiply, 6, 7).unwrap()
        }
    }

    fn started() -> TugOfWar<FortyTwo> {
        let mut game = TugOfWar::with_source(MatchConfig::default(), FortyTwo).unwrap();
        game.submit_setup(&["Tim Biru", "Tim Merah"]).unwrap();
        game
    }

    fn answer(game: &mut TugOfWar<FortyTwo>, side: TeamSide) -> Vec<MatchEvent> {
        game.submit_digit(side, 4);
        game.submit_digit(side, 2)
    }

    #[test]
    fn test_initial_state() {
        let game = TugOfWar::new(MatchConfig::default(), 1).unwrap();
        assert_eq!(game.mode(), AppMode::Setup);
        assert_eq!(game.round().phase(), RoundPhase::Inactive);
        assert_eq!(game.status(), &StatusMessage::initial());
        assert_eq!(game.team(TeamSide::A), "Tim Biru");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MatchConfig::default().with_max_displacement(0);
        assert!(TugOfWar::new(config, 1).is_err());
    }

    #[test]
    fn test_correct_answer_moves_rope_and_schedules() {
        let mut game = started();
        let events = answer(&mut game, TeamSide::B);

        assert_eq!(
            events,
            vec![MatchEvent::CorrectAnswer {
                side: TeamSide::B,
                team: "Tim Merah".into(),
                position: 1,
                points: 1,
            }]
        );
        assert_eq!(game.round().phase(), RoundPhase::Resolving);
        assert!(game.has_pending_round());
        assert_eq!(game.status().text, "Tim Merah menjawab dengan benar!");
    }

    #[test]
    fn test_input_ignored_while_resolving() {
        let mut game = started();
        answer(&mut game, TeamSide::A);

        assert!(answer(&mut game, TeamSide::B).is_empty());
        assert_eq!(game.rope().position(), -1);
    }

    #[test]
    fn test_next_round_after_delay() {
        let mut game = started();
        answer(&mut game, TeamSide::A);

        assert!(game.advance(Duration::from_millis(799)).is_empty());
        let events = game.advance(Duration::from_millis(1));

        assert_eq!(events, vec![MatchEvent::RoundStarted { question: "Berapa 6 × 7?".into() }]);
        assert!(game.is_round_active());
        assert!(game.round().input(TeamSide::A).is_empty());
    }

    #[test]
    fn test_reset_cancels_pending_round() {
        let mut game = started();
        answer(&mut game, TeamSide::A);
        game.reset_match();

        assert!(!game.has_pending_round());
        assert!(game.advance(Duration::from_secs(5)).is_empty());
        assert_eq!(game.rope().position(), 0);
    }

    #[test]
    fn test_edit_teams_pauses() {
        let mut game = started();
        answer(&mut game, TeamSide::A);
        let events = game.edit_teams();

        assert_eq!(events, vec![MatchEvent::Paused, MatchEvent::SetupOpened]);
        assert_eq!(game.mode(), AppMode::Setup);
        assert_eq!(game.round().phase(), RoundPhase::Inactive);
        assert!(!game.has_pending_round());
        assert_eq!(game.status().text, "Mengatur tim... berikutnya mulai pertandingan.");
    }

    #[test]
    fn test_rejected_selection_sets_status() {
        let mut game = started();
        let err = game.select_match("Tim Biru", "Tim Biru").unwrap_err();

        assert_eq!(err, InvalidSelection::SameTeam("Tim Biru".into()));
        assert_eq!(game.status().text, "Pilih dua tim berbeda.");
        assert_eq!(game.team(TeamSide::B), "Tim Merah");
    }

    #[test]
    fn test_acknowledge_without_winner() {
        let mut game = started();
        assert!(game.acknowledge_victory().is_none());
    }
}
