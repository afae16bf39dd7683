//! Contrib Breakout - breakout against a contribution-graph heatmap
//!
//! Core modules:
//! - `sim`: Pure simulation (grid, physics, session state machine)
//! - `game`: Per-frame loop driver over the simulation
//! - `renderer`: Scene building plus Canvas 2D and WebGPU backends
//! - `platform`: Keyboard intent queue and autopilot
//! - `settings`: Render backend and feature toggles
//! - `audio`: Web Audio sound effects

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, LoopControl};
pub use settings::{RenderBackend, Settings};

/// Game configuration constants
pub mod consts {
    /// Default drawing surface size (native runs and tests)
    pub const DEFAULT_ARENA_WIDTH: f32 = 640.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    /// Ball spawns this far above the bottom edge
    pub const BALL_START_OFFSET_Y: f32 = 30.0;
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;

    /// Paddle defaults - pinned to the bottom edge
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Horizontal paddle travel per frame while a direction is held
    pub const PADDLE_STEP: f32 = 5.0;
    /// Horizontal velocity added at the paddle tip (scaled by hit offset)
    pub const PADDLE_SPIN: f32 = 2.0;

    /// Heatmap grid: one column per week, one row per weekday
    pub const GRID_COLUMNS: usize = 53;
    pub const GRID_ROWS: usize = 7;
    pub const CELL_SIZE: f32 = 10.0;
    pub const CELL_PADDING: f32 = 1.0;
    pub const GRID_OFFSET_TOP: f32 = 30.0;
    pub const GRID_OFFSET_LEFT: f32 = 30.0;

    /// Scoring
    pub const SCORE_PER_HIT: u64 = 10;
    pub const WIN_SCORE: u64 = 500;
}
