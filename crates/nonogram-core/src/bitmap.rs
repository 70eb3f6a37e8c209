//! Plain `0`/`1` bitmaps.
//!
//! ```text
//! 0110
//! 1001
//! ```
//!
//! Each line is one row; `1` is a filled cell, `0` an empty one.

use crate::error::{Error, Result};
use crate::grid::{EMPTY, Grid};
use crate::puzzle::Puzzle;

/// Color id given to filled bitmap cells
pub const FILLED: u32 = 1;

/// Parse a bitmap into a monochrome grid
pub fn parse_bitmap(text: &str) -> Result<Grid> {
    let lines: Vec<&str> = text.trim_end().lines().collect();

    let mut rows = Vec::with_capacity(lines.len());
    for (row, line) in lines.iter().enumerate() {
        let cells = line
            .chars()
            .enumerate()
            .map(|(column, cell)| match cell {
                '0' => Ok(EMPTY),
                '1' => Ok(FILLED),
                _ => Err(Error::InvalidBitmapCell { row, column }),
            })
            .collect::<Result<Vec<u32>>>()?;
        rows.push(cells);
    }

    let expected = rows.first().map_or(0, Vec::len);
    if expected == 0 {
        return Err(Error::EmptyBitmap);
    }
    if let Some((row, cells)) = rows
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != expected)
    {
        return Err(Error::RaggedBitmap {
            row,
            expected,
            actual: cells.len(),
        });
    }

    Grid::from_rows(&rows).ok_or(Error::EmptyBitmap)
}

/// Parse a bitmap and extract its monochrome clues
pub fn bitmap_puzzle(text: &str) -> Result<Puzzle> {
    let grid = parse_bitmap(text)?;
    Ok(Puzzle::from_grid(&grid, false))
}
