//! Terminal previews of decoded grids.

use owo_colors::OwoColorize;

use crate::decode::Palette;
use crate::grid::{EMPTY, Grid};

const FILLED_CELL: &str = "██";
const EMPTY_CELL: &str = "··";

/// Render `grid` two characters per cell.
///
/// With `color`, filled cells are drawn in their palette color; cells whose
/// color is missing from the palette fall back to the terminal default.
pub fn render_preview(grid: &Grid, palette: &Palette, color: bool) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        for &cell in row {
            if cell == EMPTY {
                out.push_str(EMPTY_CELL);
                continue;
            }
            match palette.find(cell).filter(|_| color) {
                Some(entry) => {
                    let (r, g, b) = entry.rgb();
                    out.push_str(&FILLED_CELL.truecolor(r, g, b).to_string());
                }
                None => out.push_str(FILLED_CELL),
            }
        }
        out.push('\n');
    }
    out
}
