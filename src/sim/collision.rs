//! Collision detection and response
//!
//! Everything is axis-aligned. Walls and paddle look one step ahead
//! (`pos + vel`), cells test the current ball centre.

use glam::Vec2;

use super::grid::{Cell, Grid};
use super::state::{Arena, Ball, Paddle};
use crate::consts::PADDLE_SPIN;

/// Active cells whose box contains `point`
///
/// Scans the whole grid without early exit, so overlapping cells all report.
pub fn cells_containing(grid: &Grid, point: Vec2) -> impl Iterator<Item = &Cell> {
    grid.active_cells().filter(move |cell| cell.contains(point))
}

/// Reflect off the side and top walls
///
/// Returns true if either velocity component flipped. There is no bottom
/// wall: a ball that passes the paddle leaves the arena.
pub fn reflect_walls(ball: &mut Ball, arena: &Arena) -> bool {
    let next = ball.pos + ball.vel;
    let mut bounced = false;

    if next.x < ball.radius || next.x > arena.width - ball.radius {
        ball.vel.x = -ball.vel.x;
        bounced = true;
    }
    if next.y < ball.radius {
        ball.vel.y = -ball.vel.y;
        bounced = true;
    }

    bounced
}

/// Normalized hit offset from paddle centre, in [-1, 1]
#[inline]
pub fn paddle_hit_offset(x: f32, paddle: &Paddle) -> f32 {
    ((x - paddle.center()) / (paddle.width / 2.0)).clamp(-1.0, 1.0)
}

/// Reflect off the paddle, adding spin from the hit offset
///
/// Returns the hit offset when the ball bounced.
pub fn reflect_paddle(ball: &mut Ball, paddle: &Paddle, arena: &Arena) -> Option<f32> {
    let next_y = ball.pos.y + ball.vel.y;
    let crossing = next_y > arena.height - ball.radius - paddle.height;

    if crossing && paddle.spans(ball.pos.x) {
        let offset = paddle_hit_offset(ball.pos.x, paddle);
        ball.vel.y = -ball.vel.y;
        ball.vel.x += offset * PADDLE_SPIN;
        return Some(offset);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::grid::slot_position;

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(dx, dy),
            radius: BALL_RADIUS,
        }
    }

    #[test]
    fn test_cells_containing_highlight() {
        let grid = Grid::new();
        let point = slot_position(25, 2) + Vec2::splat(CELL_SIZE / 2.0);
        let hits: Vec<_> = cells_containing(&grid, point).map(|c| (c.column, c.row)).collect();
        assert_eq!(hits, vec![(25, 2)]);
    }

    #[test]
    fn test_background_cells_all_hit_at_origin() {
        // Every neutral cell shares the origin box
        let grid = Grid::new();
        let hits = cells_containing(&grid, Vec2::new(5.0, 5.0)).count();
        assert_eq!(hits, GRID_COLUMNS * GRID_ROWS - 14);
    }

    #[test]
    fn test_no_hits_in_open_space() {
        let grid = Grid::new();
        assert_eq!(cells_containing(&grid, Vec2::new(320.0, 200.0)).count(), 0);
    }

    #[test]
    fn test_reflect_left_wall() {
        let arena = Arena::default();
        let mut ball = ball_at(3.0, 200.0, -2.0, -2.0);
        assert!(reflect_walls(&mut ball, &arena));
        assert_eq!(ball.vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_reflect_right_wall() {
        let arena = Arena::default();
        let mut ball = ball_at(arena.width - 6.0, 200.0, 2.0, 2.0);
        assert!(reflect_walls(&mut ball, &arena));
        assert_eq!(ball.vel.x, -2.0);
    }

    #[test]
    fn test_reflect_top_wall() {
        let arena = Arena::default();
        let mut ball = ball_at(300.0, 6.0, 2.0, -2.0);
        assert!(reflect_walls(&mut ball, &arena));
        assert_eq!(ball.vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_no_bottom_wall() {
        let arena = Arena::default();
        let mut ball = ball_at(300.0, arena.height - 1.0, 2.0, 2.0);
        assert!(!reflect_walls(&mut ball, &arena));
        assert_eq!(ball.vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_paddle_center_hit_has_no_spin() {
        let arena = Arena::default();
        let paddle = Paddle::new(&arena);
        let mut ball = ball_at(paddle.center(), arena.height - 16.0, 2.0, 2.0);
        assert_eq!(reflect_paddle(&mut ball, &paddle, &arena), Some(0.0));
        assert_eq!(ball.vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_paddle_edge_hit_adds_spin() {
        let arena = Arena::default();
        let paddle = Paddle::new(&arena);
        // Three quarters towards the right tip
        let x = paddle.center() + paddle.width * 0.375;
        let mut ball = ball_at(x, arena.height - 16.0, 1.0, 2.0);
        let offset = reflect_paddle(&mut ball, &paddle, &arena).unwrap();
        assert!((offset - 0.75).abs() < 1e-5);
        assert!((ball.vel.x - 2.5).abs() < 1e-5);
        assert_eq!(ball.vel.y, -2.0);
    }

    #[test]
    fn test_paddle_miss() {
        let arena = Arena::default();
        let paddle = Paddle::new(&arena);
        let mut ball = ball_at(10.0, arena.height - 16.0, 2.0, 2.0);
        assert_eq!(reflect_paddle(&mut ball, &paddle, &arena), None);
        assert_eq!(ball.vel, Vec2::new(2.0, 2.0));
    }
}
