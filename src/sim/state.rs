//! Game state and core simulation types
//!
//! Everything the simulation touches lives in one `GameState` value.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::session::Session;
use crate::consts::*;

/// Drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at its serve position for the given arena
    pub fn new(arena: &Arena) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        };
        ball.reset(arena);
        ball
    }

    /// Put the ball back at its serve position and velocity
    pub fn reset(&mut self, arena: &Arena) {
        self.pos = Vec2::new(arena.width / 2.0, arena.height - BALL_START_OFFSET_Y);
        self.vel = Vec2::new(BALL_START_DX, BALL_START_DY);
    }
}

/// The player's paddle (y is pinned to the arena bottom)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centred horizontally
    pub fn new(arena: &Arena) -> Self {
        Self {
            x: (arena.width - PADDLE_WIDTH) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Top edge in arena pixels
    #[inline]
    pub fn top(&self, arena: &Arena) -> f32 {
        arena.height - self.height
    }

    /// Strict horizontal span check
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + self.width
    }

    /// Shift by `dx`, clamped to the arena
    pub fn shift(&mut self, dx: f32, arena: &Arena) {
        let max_x = (arena.width - self.width).max(0.0);
        self.x = (self.x + dx).clamp(0.0, max_x);
    }
}

/// Outcome of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Things that happened during a step (sound, logging)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball centre was inside an active cell
    CellHit { column: usize, row: usize },
    /// Ball bounced off the side or top wall
    WallBounce,
    /// Ball bounced off the paddle (hit offset in [-1, 1])
    PaddleBounce { offset: f32 },
    /// Session ended this step
    SessionEnded(Outcome),
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub grid: Grid,
    pub ball: Ball,
    pub paddle: Paddle,
    pub session: Session,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Arena::default())
    }
}

impl GameState {
    /// Idle state for the given surface
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            grid: Grid::new(),
            ball: Ball::new(&arena),
            paddle: Paddle::new(&arena),
            session: Session::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Reposition the projectile only (no session change)
    pub fn reset_ball(&mut self) {
        self.ball.reset(&self.arena);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_serve_position() {
        let arena = Arena::new(600.0, 300.0);
        let ball = Ball::new(&arena);
        assert_eq!(ball.pos, Vec2::new(300.0, 270.0));
        assert_eq!(ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(ball.radius, BALL_RADIUS);
    }

    #[test]
    fn test_paddle_centered() {
        let arena = Arena::new(600.0, 300.0);
        let paddle = Paddle::new(&arena);
        assert_eq!(paddle.x, 262.5);
        assert_eq!(paddle.center(), 300.0);
        assert_eq!(paddle.top(&arena), 290.0);
    }

    #[test]
    fn test_paddle_shift_clamps() {
        let arena = Arena::default();
        let mut paddle = Paddle::new(&arena);
        paddle.shift(-10_000.0, &arena);
        assert_eq!(paddle.x, 0.0);
        paddle.shift(10_000.0, &arena);
        assert_eq!(paddle.x, arena.width - PADDLE_WIDTH);
    }

    #[test]
    fn test_paddle_spans_is_strict() {
        let arena = Arena::default();
        let paddle = Paddle::new(&arena);
        assert!(paddle.spans(paddle.center()));
        assert!(!paddle.spans(paddle.x));
        assert!(!paddle.spans(paddle.x + paddle.width));
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::default();
        assert!(!state.is_running());
        assert_eq!(state.session.score, 0);
    }
}
