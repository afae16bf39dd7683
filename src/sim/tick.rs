//! Per-frame simulation step
//!
//! One call per animation frame while the session is running. The step is
//! frame-locked: velocities are in pixels per frame.

use super::collision::{cells_containing, reflect_paddle, reflect_walls};
use super::session::check_end;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Directional intent flags for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intents {
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by one frame
///
/// Does nothing unless the session is running. The end-of-session check
/// happens after cell scoring but before the ball moves, so the frame that
/// ends a session still completes its motion.
pub fn advance(state: &mut GameState, intents: &Intents) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }

    // Cell hits: every containing cell flips dy and scores
    let center = state.ball.pos;
    let hits: Vec<(usize, usize)> = cells_containing(&state.grid, center)
        .map(|cell| (cell.column, cell.row))
        .collect();
    for (column, row) in hits {
        state.ball.vel.y = -state.ball.vel.y;
        state.session.score += SCORE_PER_HIT;
        events.push(GameEvent::CellHit { column, row });
    }

    if let Some(outcome) = check_end(state) {
        events.push(GameEvent::SessionEnded(outcome));
    }

    state.ball.pos += state.ball.vel;

    if reflect_walls(&mut state.ball, &state.arena) {
        events.push(GameEvent::WallBounce);
    }

    if let Some(offset) = reflect_paddle(&mut state.ball, &state.paddle, &state.arena) {
        events.push(GameEvent::PaddleBounce { offset });
    }

    // Right then left, each clamped on its own
    if intents.right {
        state.paddle.shift(PADDLE_STEP, &state.arena);
    }
    if intents.left {
        state.paddle.shift(-PADDLE_STEP, &state.arena);
    }

    events
}
