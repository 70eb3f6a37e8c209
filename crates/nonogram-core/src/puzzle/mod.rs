//! Clue sheets: the row and column clues of a puzzle.

mod parse;
mod render;

use serde::Serialize;

use crate::clue::{ClueLine, extract_clues};
use crate::grid::{Axis, Grid};

pub use render::Layout;

/// Row and column clues with the puzzle dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub width: usize,
    pub height: usize,
    pub multicolor: bool,
    /// One line per column, left to right
    pub columns: Vec<ClueLine>,
    /// One line per row, top to bottom
    pub rows: Vec<ClueLine>,
}

impl Puzzle {
    /// Extract clues from a filled grid
    pub fn from_grid(grid: &Grid, multicolor: bool) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            multicolor,
            columns: extract_clues(grid, Axis::Column),
            rows: extract_clues(grid, Axis::Row),
        }
    }

    pub fn lines(&self, axis: Axis) -> &[ClueLine] {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.columns,
        }
    }

    /// Number of cells in each line along `axis`
    pub fn line_length(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.width,
            Axis::Column => self.height,
        }
    }

    /// Highest color id used by any clue
    pub fn max_color(&self) -> u32 {
        self.rows
            .iter()
            .chain(&self.columns)
            .flatten()
            .map(|clue| clue.color)
            .max()
            .unwrap_or(0)
    }

    /// Check that `grid` satisfies every clue
    pub fn is_solved_by(&self, grid: &Grid) -> bool {
        grid.width() == self.width
            && grid.height() == self.height
            && extract_clues(grid, Axis::Row) == self.rows
            && extract_clues(grid, Axis::Column) == self.columns
    }
}
