//! Backend-neutral description of one frame
//!
//! Built fresh from the game state every frame; both backends consume the
//! same `Scene`, which keeps draw order identical between them.

use glam::Vec2;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameState, Shade};

/// A fill color in both CSS and RGBA form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub css: &'static str,
    pub rgba: [f32; 4],
}

impl Color {
    pub const fn new(css: &'static str, rgba: [f32; 4]) -> Self {
        Self { css, rgba }
    }
}

impl From<Shade> for Color {
    fn from(shade: Shade) -> Self {
        Color::new(shade.css(), shade.rgba())
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BALL: Color = Color::new("#000", [0.0, 0.0, 0.0, 1.0]);
    pub const PADDLE: Color = Color::new("#000", [0.0, 0.0, 0.0, 1.0]);
    pub const LABEL: Color = Color::new("#666", [0.4, 0.4, 0.4, 1.0]);
    /// Cleared canvas shows the page behind it; the GPU path clears to white
    pub const BACKGROUND: Color = Color::new("transparent", [1.0, 1.0, 1.0, 1.0]);
}

pub const LABEL_FONT: &str = "10px Arial";

/// Weekday labels and the rows they sit beside
pub const DAY_LABELS: [(&str, usize); 3] = [("Mon", 1), ("Wed", 3), ("Fri", 5)];

/// Month labels and the week column each starts at
pub const MONTH_LABELS: [(&str, usize); 13] = [
    ("Sep", 0),
    ("Oct", 4),
    ("Nov", 9),
    ("Dec", 13),
    ("Jan", 18),
    ("Feb", 22),
    ("Mar", 26),
    ("Apr", 31),
    ("May", 35),
    ("Jun", 39),
    ("Jul", 44),
    ("Aug", 48),
    ("Sep", 52),
];

/// A filled primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// Text drawn at a baseline position
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: &'static str,
    pub pos: Vec2,
}

/// Everything needed to draw one frame, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub background: Color,
    pub labels: Vec<Label>,
    pub shapes: Vec<Shape>,
}

/// Weekday and month labels around the grid
pub fn grid_labels() -> Vec<Label> {
    let pitch = CELL_SIZE + CELL_PADDING;
    let mut labels = Vec::with_capacity(DAY_LABELS.len() + MONTH_LABELS.len());

    for (text, row) in DAY_LABELS {
        labels.push(Label {
            text,
            pos: Vec2::new(5.0, GRID_OFFSET_TOP + row as f32 * pitch + CELL_SIZE / 2.0),
        });
    }
    for (text, column) in MONTH_LABELS {
        labels.push(Label {
            text,
            pos: Vec2::new(GRID_OFFSET_LEFT + column as f32 * pitch, GRID_OFFSET_TOP - 10.0),
        });
    }

    labels
}

/// Build the scene for the current state
pub fn build_scene(state: &GameState, settings: &Settings) -> Scene {
    let labels = if settings.show_labels {
        grid_labels()
    } else {
        Vec::new()
    };

    let mut shapes: Vec<Shape> = state
        .grid
        .active_cells()
        .map(|cell| Shape::Rect {
            pos: cell.pos,
            size: Vec2::splat(CELL_SIZE),
            color: cell.shade.into(),
        })
        .collect();

    shapes.push(Shape::Circle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: colors::BALL,
    });

    let paddle = &state.paddle;
    shapes.push(Shape::Rect {
        pos: Vec2::new(paddle.x, paddle.top(&state.arena)),
        size: Vec2::new(paddle.width, paddle.height),
        color: colors::PADDLE,
    });

    Scene {
        width: state.arena.width,
        height: state.arena.height,
        background: colors::BACKGROUND,
        labels,
        shapes,
    }
}
