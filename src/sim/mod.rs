//! Pure simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Frame-locked steps only (velocities in pixels per frame)
//! - Time enters as a host timestamp argument
//! - Stable column-major iteration over the grid

pub mod collision;
pub mod grid;
pub mod session;
pub mod state;
pub mod tick;

pub use grid::{Cell, CellStatus, Grid, HIGHLIGHTS, Highlight, Shade, init_grid};
pub use session::{Phase, Session, SessionSummary, check_end, reset, start};
pub use state::{Arena, Ball, GameEvent, GameState, Outcome, Paddle};
pub use tick::{Intents, advance};
