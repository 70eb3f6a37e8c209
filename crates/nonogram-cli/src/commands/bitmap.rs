//! Bitmap command for turning a 0/1 picture into clue text.

use std::path::Path;

use anyhow::{Context, Result};
use nonogram_core::{Layout, bitmap_puzzle};
use tracing::info;

use crate::input::read_input;

pub fn run(input: &Path, layout: Layout) -> Result<()> {
    let text = read_input(input)?;
    let output = convert_bitmap(&text, layout)?;
    print!("{}", output);
    if layout == Layout::Html {
        println!();
    }
    Ok(())
}

fn convert_bitmap(text: &str, layout: Layout) -> Result<String> {
    let puzzle = bitmap_puzzle(text).context("Failed to parse bitmap")?;
    info!("Converted {}x{} bitmap", puzzle.width, puzzle.height);
    Ok(puzzle.render(layout))
}
