//! Loop driver
//!
//! Owns the game state and input queue on behalf of the platform adapter.
//! The adapter calls `frame` from each animation-frame callback and only
//! schedules another one while `frame` returns `LoopControl::Continue`.

use crate::platform::{InputQueue, autopilot};
use crate::settings::Settings;
use crate::sim::{self, Arena, GameEvent, GameState, SessionSummary};

/// Whether the adapter should request another animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Button triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Idle/Ended -> Running; ignored while running
    Start,
    /// Same as `Start`: a running session is left alone
    Restart,
    /// Put the ball back at its serve position
    Reset,
}

/// Game instance holding all mutable state
pub struct Game {
    pub state: GameState,
    pub input: InputQueue,
    /// Events produced by the last frame (sound, logging)
    events: Vec<GameEvent>,
    /// An animation-frame chain is currently scheduled
    loop_active: bool,
}

impl Game {
    pub fn new(arena: Arena, settings: &Settings) -> Self {
        Self {
            state: GameState::new(arena),
            input: InputQueue::new(settings.autopilot),
            events: Vec::new(),
            loop_active: false,
        }
    }

    /// Apply a control trigger
    ///
    /// Returns true when the caller must start a new animation-frame chain.
    pub fn control(&mut self, control: Control, now_ms: f64) -> bool {
        match control {
            Control::Start | Control::Restart => {
                if !sim::start(&mut self.state, now_ms) {
                    log::debug!("{control:?} ignored, session already running");
                }
            }
            Control::Reset => {
                sim::reset(&mut self.state);
                log::info!("Ball reset");
            }
        }

        if self.state.is_running() && !self.loop_active {
            self.loop_active = true;
            return true;
        }
        false
    }

    /// Run one animation-frame step
    pub fn frame(&mut self, now_ms: f64) -> LoopControl {
        if !self.state.is_running() {
            self.loop_active = false;
            return LoopControl::Stop;
        }

        let mut intents = self.input.drain();
        if self.input.autopilot() {
            intents = autopilot::steer(&self.state);
        }

        self.state.session.update_elapsed(now_ms);
        self.events = sim::advance(&mut self.state, &intents);

        for event in &self.events {
            match event {
                GameEvent::CellHit { column, row } => {
                    log::debug!("Cell hit at ({column}, {row}), score {}", self.state.session.score);
                }
                GameEvent::SessionEnded(_) => {
                    if let Some(summary) = SessionSummary::from_session(&self.state.session) {
                        match serde_json::to_string(&summary) {
                            Ok(json) => log::info!("Session ended: {json}"),
                            Err(e) => log::warn!("Failed to encode session summary: {e}"),
                        }
                    }
                }
                _ => {}
            }
        }

        LoopControl::Continue
    }

    /// Take the events produced by the last frame
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[cfg(test)]
    fn is_loop_active(&self) -> bool {
        self.loop_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Direction, InputEvent};
    use crate::sim::{Outcome, Phase};
    use glam::Vec2;

    fn game() -> Game {
        Game::new(Arena::default(), &Settings::default())
    }

    #[test]
    fn test_idle_frame_stops() {
        let mut game = game();
        assert_eq!(game.frame(0.0), LoopControl::Stop);
        assert!(!game.is_loop_active());
    }

    #[test]
    fn test_start_requests_single_chain() {
        let mut game = game();
        assert!(game.control(Control::Start, 0.0));
        assert!(game.is_loop_active());
        // Already scheduled: neither start nor restart spawn a second chain
        assert!(!game.control(Control::Start, 10.0));
        assert!(!game.control(Control::Restart, 20.0));
        assert_eq!(game.frame(16.0), LoopControl::Continue);
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut game = game();
        game.control(Control::Start, 0.0);
        game.state.session.score = 120;
        assert!(!game.control(Control::Restart, 5_000.0));
        assert_eq!(game.state.session.score, 120);
        assert_eq!(game.state.session.started_at_ms, Some(0.0));
        assert_eq!(game.state.session.phase, Phase::Running);
    }

    #[test]
    fn test_restart_after_loss_starts_over() {
        let mut game = game();
        game.control(Control::Start, 0.0);
        game.state.session.score = 120;
        game.state.session.phase = Phase::Ended(Outcome::Lost);
        assert_eq!(game.frame(16.0), LoopControl::Stop);

        assert!(game.control(Control::Restart, 5_000.0));
        assert_eq!(game.state.session.score, 0);
        assert_eq!(game.state.session.started_at_ms, Some(5_000.0));
        assert_eq!(game.state.session.phase, Phase::Running);
    }

    #[test]
    fn test_reset_while_idle_does_not_start_loop() {
        let mut game = game();
        game.state.ball.pos = Vec2::new(1.0, 1.0);
        assert!(!game.control(Control::Reset, 0.0));
        assert_eq!(game.state.session.phase, Phase::Idle);
        assert_eq!(game.state.ball.pos.y, game.state.arena.height - 30.0);
    }

    #[test]
    fn test_keys_drained_at_frame_start() {
        let mut game = game();
        game.control(Control::Start, 0.0);
        let x = game.state.paddle.x;
        game.input.push(InputEvent::Press(Direction::Right));
        game.frame(16.0);
        assert_eq!(game.state.paddle.x, x + 5.0);
        game.input.push(InputEvent::Release(Direction::Right));
        game.frame(32.0);
        assert_eq!(game.state.paddle.x, x + 5.0);
    }

    #[test]
    fn test_loss_stops_loop_on_next_frame() {
        let mut game = game();
        game.control(Control::Start, 0.0);
        game.state.paddle.x = 0.0;
        game.state.ball.pos = Vec2::new(500.0, game.state.arena.height + 1.0);

        assert_eq!(game.frame(16.0), LoopControl::Continue);
        assert!(game.take_events().contains(&GameEvent::SessionEnded(Outcome::Lost)));
        assert_eq!(game.frame(32.0), LoopControl::Stop);
        assert!(!game.is_loop_active());

        // A fresh start after the loop stopped needs a new chain
        assert!(game.control(Control::Start, 40.0));
        assert_eq!(game.state.session.score, 0);
    }

    #[test]
    fn test_elapsed_time_tracks_frames() {
        let mut game = game();
        game.control(Control::Start, 1_000.0);
        game.frame(3_500.0);
        assert_eq!(game.state.session.elapsed_secs, 2);
    }

    #[test]
    fn test_autopilot_overrides_keys() {
        let settings = Settings {
            autopilot: true,
            ..Settings::default()
        };
        let mut game = Game::new(Arena::default(), &settings);
        game.control(Control::Start, 0.0);
        game.state.ball.pos.x = 100.0;
        let x = game.state.paddle.x;
        game.input.push(InputEvent::Press(Direction::Right));
        game.frame(16.0);
        assert_eq!(game.state.paddle.x, x - 5.0);
    }
}
