//! Heatmap grid of collidable cells
//!
//! The grid mirrors a year of contribution activity: one column per week,
//! one row per weekday. Only the highlighted cells get a real position; every
//! other cell stays at the origin with the neutral shade.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Whether a cell still takes part in collisions and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Active,
    Destroyed,
}

/// Heatmap intensity level (0 = no activity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Shade(pub u8);

impl Shade {
    pub const NEUTRAL: Shade = Shade(0);

    /// CSS color for the 2D canvas
    pub fn css(self) -> &'static str {
        match self.0 {
            1 => "#9be9a8",
            2 => "#40c463",
            3 => "#30a14e",
            4 => "#216e39",
            _ => "#d3e0ea",
        }
    }

    /// RGBA (0-1, sRGB encoded) for the GPU pipeline
    pub fn rgba(self) -> [f32; 4] {
        match self.0 {
            1 => [0.608, 0.914, 0.659, 1.0],
            2 => [0.251, 0.769, 0.388, 1.0],
            3 => [0.188, 0.631, 0.306, 1.0],
            4 => [0.129, 0.431, 0.224, 1.0],
            _ => [0.827, 0.878, 0.918, 1.0],
        }
    }
}

/// A single grid cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
    /// Top-left corner in arena pixels
    pub pos: Vec2,
    pub status: CellStatus,
    pub shade: Shade,
}

impl Cell {
    fn background(column: usize, row: usize) -> Self {
        Self {
            column,
            row,
            pos: Vec2::ZERO,
            status: CellStatus::Active,
            shade: Shade::NEUTRAL,
        }
    }

    /// Strict point containment (edges do not count)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.pos.x
            && point.x < self.pos.x + CELL_SIZE
            && point.y > self.pos.y
            && point.y < self.pos.y + CELL_SIZE
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == CellStatus::Active
    }
}

/// A highlighted cell in the heatmap layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub column: usize,
    pub row: usize,
    pub shade: Shade,
}

const fn hl(column: usize, row: usize, shade: u8) -> Highlight {
    Highlight {
        column,
        row,
        shade: Shade(shade),
    }
}

/// Fixed heatmap layout
pub const HIGHLIGHTS: [Highlight; 14] = [
    hl(10, 5, 1),
    hl(15, 6, 2),
    hl(20, 4, 3),
    hl(25, 2, 4),
    hl(30, 5, 1),
    hl(35, 3, 2),
    hl(40, 5, 3),
    hl(45, 3, 4),
    hl(46, 5, 1),
    hl(49, 1, 2),
    hl(50, 3, 3),
    hl(51, 5, 4),
    hl(51, 3, 1),
    hl(51, 1, 2),
];

/// Top-left pixel position of a grid slot
#[inline]
pub fn slot_position(column: usize, row: usize) -> Vec2 {
    Vec2::new(
        column as f32 * (CELL_SIZE + CELL_PADDING) + GRID_OFFSET_LEFT,
        row as f32 * (CELL_SIZE + CELL_PADDING) + GRID_OFFSET_TOP,
    )
}

/// Column-major matrix of cells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Build a fresh grid with the heatmap layout applied
    pub fn new() -> Self {
        let mut cells = Vec::with_capacity(GRID_COLUMNS * GRID_ROWS);
        for column in 0..GRID_COLUMNS {
            for row in 0..GRID_ROWS {
                cells.push(Cell::background(column, row));
            }
        }

        let mut grid = Self { cells };
        for h in &HIGHLIGHTS {
            let idx = Self::index(h.column, h.row);
            grid.cells[idx] = Cell {
                column: h.column,
                row: h.row,
                pos: slot_position(h.column, h.row),
                status: CellStatus::Active,
                shade: h.shade,
            };
        }
        grid
    }

    #[inline]
    fn index(column: usize, row: usize) -> usize {
        column * GRID_ROWS + row
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<&Cell> {
        if column >= GRID_COLUMNS || row >= GRID_ROWS {
            return None;
        }
        self.cells.get(Self::index(column, row))
    }

    pub fn cell_mut(&mut self, column: usize, row: usize) -> Option<&mut Cell> {
        if column >= GRID_COLUMNS || row >= GRID_ROWS {
            return None;
        }
        self.cells.get_mut(Self::index(column, row))
    }

    /// All cells, column-major
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn active_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_active())
    }

    /// Cells carrying a non-neutral shade
    pub fn highlighted(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.shade != Shade::NEUTRAL)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Rebuild the grid in place
pub fn init_grid(grid: &mut Grid) {
    *grid = Grid::new();
}
