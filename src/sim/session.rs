//! Session state machine
//!
//! `Idle -> Running -> Ended(Won | Lost) -> Running ...`

use serde::{Deserialize, Serialize};

use super::grid::init_grid;
use super::state::{GameState, Outcome, Paddle};
use crate::consts::WIN_SCORE;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing started yet
    #[default]
    Idle,
    /// Ball in play
    Running,
    /// Session finished
    Ended(Outcome),
}

/// Score, clock and phase of the current play-through
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub phase: Phase,
    pub score: u64,
    /// Host timestamp (ms) when the session started
    pub started_at_ms: Option<f64>,
    /// Whole seconds since start, frozen once the session ends
    pub elapsed_secs: u64,
}

impl Session {
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Refresh the elapsed clock (only while running)
    pub fn update_elapsed(&mut self, now_ms: f64) {
        if !self.is_running() {
            return;
        }
        if let Some(start) = self.started_at_ms {
            self.elapsed_secs = ((now_ms - start) / 1000.0).floor().max(0.0) as u64;
        }
    }

    /// Result line shown under the board
    pub fn message(&self) -> &'static str {
        match self.phase {
            Phase::Ended(Outcome::Lost) => "You Lose!",
            Phase::Ended(Outcome::Won) => "You Win!",
            Phase::Idle | Phase::Running => "",
        }
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn time_text(&self) -> String {
        format!("Time: {}s", self.elapsed_secs)
    }
}

/// Loggable summary of a finished session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub outcome: Outcome,
    pub score: u64,
    pub elapsed_secs: u64,
}

impl SessionSummary {
    pub fn from_session(session: &Session) -> Option<Self> {
        match session.phase {
            Phase::Ended(outcome) => Some(Self {
                outcome,
                score: session.score,
                elapsed_secs: session.elapsed_secs,
            }),
            _ => None,
        }
    }
}

/// Start a session from `Idle` or `Ended`
///
/// Returns false (and changes nothing) if a session is already running.
pub fn start(state: &mut GameState, now_ms: f64) -> bool {
    if state.session.is_running() {
        return false;
    }
    state.session = Session {
        phase: Phase::Running,
        score: 0,
        started_at_ms: Some(now_ms),
        elapsed_secs: 0,
    };
    init_grid(&mut state.grid);
    state.ball.reset(&state.arena);
    state.paddle = Paddle::new(&state.arena);
    log::info!("Session started");
    true
}

/// Reposition the projectile only
pub fn reset(state: &mut GameState) {
    state.reset_ball();
}

/// Evaluate loss then win; the later check takes precedence
pub fn check_end(state: &mut GameState) -> Option<Outcome> {
    if !state.session.is_running() {
        return None;
    }

    let mut outcome = None;
    if state.ball.pos.y > state.arena.height {
        outcome = Some(Outcome::Lost);
    }
    if state.session.score >= WIN_SCORE {
        outcome = Some(Outcome::Won);
    }

    if let Some(outcome) = outcome {
        state.session.phase = Phase::Ended(outcome);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::{CellStatus, HIGHLIGHTS};
    use glam::Vec2;

    #[test]
    fn test_start_from_idle() {
        let mut state = GameState::default();
        assert!(start(&mut state, 1_000.0));
        assert_eq!(state.session.phase, Phase::Running);
        assert_eq!(state.session.score, 0);
        assert_eq!(state.session.started_at_ms, Some(1_000.0));
        assert_eq!(state.session.message(), "");
    }

    #[test]
    fn test_start_ignored_while_running() {
        let mut state = GameState::default();
        start(&mut state, 0.0);
        state.session.score = 40;
        assert!(!start(&mut state, 5_000.0));
        assert_eq!(state.session.score, 40);
        assert_eq!(state.session.started_at_ms, Some(0.0));
    }

    #[test]
    fn test_start_after_end_reinitializes_grid() {
        let mut state = GameState::default();
        start(&mut state, 0.0);
        state.grid.cell_mut(10, 5).unwrap().status = CellStatus::Destroyed;
        state.session.phase = Phase::Ended(Outcome::Lost);
        state.session.score = 120;

        assert!(start(&mut state, 10.0));
        assert_eq!(state.session.score, 0);
        assert_eq!(state.grid.highlighted().count(), HIGHLIGHTS.len());
        assert!(state.grid.highlighted().all(|c| c.is_active()));
    }

    #[test]
    fn test_reset_keeps_session() {
        let mut state = GameState::default();
        start(&mut state, 0.0);
        state.session.score = 70;
        state.ball.pos = Vec2::new(3.0, 4.0);
        state.ball.vel = Vec2::new(-7.0, 1.0);
        reset(&mut state);
        assert_eq!(state.ball.pos, Vec2::new(state.arena.width / 2.0, state.arena.height - 30.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.session.score, 70);
        assert!(state.is_running());
    }

    #[test]
    fn test_loss_when_ball_below_arena() {
        let mut state = GameState::default();
        start(&mut state, 0.0);
        state.ball.pos.y = state.arena.height + 1.0;
        assert_eq!(check_end(&mut state), Some(Outcome::Lost));
        assert_eq!(state.session.message(), "You Lose!");
        assert!(!state.is_running());
    }

    #[test]
    fn test_win_overrides_loss() {
        let mut state = GameState::default();
        start(&mut state, 0.0);
        state.ball.pos.y = state.arena.height + 1.0;
        state.session.score = WIN_SCORE;
        assert_eq!(check_end(&mut state), Some(Outcome::Won));
        assert_eq!(state.session.message(), "You Win!");
    }

    #[test]
    fn test_check_end_noop_when_idle() {
        let mut state = GameState::default();
        state.ball.pos.y = state.arena.height + 100.0;
        assert_eq!(check_end(&mut state), None);
        assert_eq!(state.session.phase, Phase::Idle);
    }

    #[test]
    fn test_elapsed_only_while_running() {
        let mut state = GameState::default();
        start(&mut state, 1_000.0);
        state.session.update_elapsed(3_999.0);
        assert_eq!(state.session.elapsed_secs, 2);
        assert_eq!(state.session.time_text(), "Time: 2s");

        state.session.phase = Phase::Ended(Outcome::Lost);
        state.session.update_elapsed(60_000.0);
        assert_eq!(state.session.elapsed_secs, 2);
    }

    #[test]
    fn test_summary_only_when_ended() {
        let mut state = GameState::default();
        start(&mut state, 0.0);
        assert!(SessionSummary::from_session(&state.session).is_none());
        state.session.phase = Phase::Ended(Outcome::Won);
        state.session.score = 510;
        let summary = SessionSummary::from_session(&state.session).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"{"outcome":"Won","score":510,"elapsed_secs":0}"#);
    }
}
