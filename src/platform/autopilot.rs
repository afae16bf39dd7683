//! Demo mode: the paddle chases the ball

use crate::consts::PADDLE_STEP;
use crate::sim::{GameState, Intents};

/// Intents that steer the paddle centre under the ball
///
/// Holds still inside a dead zone of one paddle step to avoid jitter.
pub fn steer(state: &GameState) -> Intents {
    let delta = state.ball.pos.x - state.paddle.center();
    Intents {
        left: delta < -PADDLE_STEP,
        right: delta > PADDLE_STEP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{advance, start};

    #[test]
    fn test_steer_towards_ball() {
        let mut state = GameState::default();
        state.ball.pos.x = state.paddle.center() + 50.0;
        assert_eq!(steer(&state), Intents { left: false, right: true });
        state.ball.pos.x = state.paddle.center() - 50.0;
        assert_eq!(steer(&state), Intents { left: true, right: false });
        state.ball.pos.x = state.paddle.center() + 2.0;
        assert_eq!(steer(&state), Intents::default());
    }

    #[test]
    fn test_autopilot_catches_up() {
        let mut state = GameState::default();
        start(&mut state, 0.0);
        for _ in 0..80 {
            let intents = steer(&state);
            advance(&mut state, &intents);
        }
        // Ball drifts 2px per frame, paddle closes at 5px per frame
        let delta = (state.ball.pos.x - state.paddle.center()).abs();
        assert!(delta <= PADDLE_STEP + 2.0, "delta = {delta}");
    }
}
