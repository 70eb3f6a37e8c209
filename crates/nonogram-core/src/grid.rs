use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr};

/// Color id reserved for unfilled cells
pub const EMPTY: u32 = 0;

/// Orientation of a grid line
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, IntoStaticStr, Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Row-major grid of color ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Build a grid from rows of equal length.
    ///
    /// Returns `None` when the rows are ragged.
    pub fn from_rows(rows: &[Vec<u32>]) -> Option<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self {
            width,
            height: rows.len(),
            cells: rows.concat(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, column: usize) -> u32 {
        self.cells[row * self.width + column]
    }

    pub fn set(&mut self, row: usize, column: usize, color: u32) {
        self.cells[row * self.width + column] = color;
    }

    /// Paint `color` over `row`, columns `start..end`
    pub fn paint(&mut self, row: usize, start: usize, end: usize, color: u32) {
        let offset = row * self.width;
        self.cells[offset + start..offset + end].fill(color);
    }

    pub fn row(&self, row: usize) -> &[u32] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        (0..self.height).map(|row| self.row(row))
    }

    /// Number of lines along `axis`
    pub fn line_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        }
    }

    /// Cells of one line, in scan order (left to right, or top to bottom)
    pub fn line(&self, axis: Axis, index: usize) -> impl Iterator<Item = u32> + '_ {
        let (start, step, len) = match axis {
            Axis::Row => (index * self.width, 1, self.width),
            Axis::Column => (index, self.width, self.height),
        };
        self.cells
            .get(start..)
            .unwrap_or_default()
            .iter()
            .step_by(step.max(1))
            .take(len)
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == EMPTY)
    }
}
