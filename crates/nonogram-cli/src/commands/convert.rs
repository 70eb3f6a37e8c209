//! Convert command for decoding packed record streams.

use std::path::Path;

use anyhow::{Context, Result};
use nonogram_core::{DecodedPuzzle, Layout, Palette, Puzzle, decode, parse_records, render_preview};
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::input::read_input;

/// JSON view of a decoded puzzle
#[derive(Serialize)]
struct PuzzleDocument<'a> {
    #[serde(flatten)]
    puzzle: Puzzle,
    palette: &'a Palette,
}

pub fn run(
    input: &Path,
    layout: Option<Layout>,
    json: bool,
    preview: bool,
    config: &Config,
) -> Result<()> {
    let text = read_input(input)?;
    let decoded = decode_text(&text)?;
    info!(
        "Decoded {}x{} puzzle with {} colors and {} segments",
        decoded.header.width,
        decoded.header.height,
        decoded.palette.len(),
        decoded.layer.segments.len()
    );

    let output = if json {
        render_json(&decoded)?
    } else {
        decoded.puzzle().render(layout.unwrap_or(config.layout))
    };
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    if preview {
        print!(
            "{}",
            render_preview(decoded.grid(), &decoded.palette, config.color_preview)
        );
    }

    Ok(())
}

pub(crate) fn decode_text(text: &str) -> Result<DecodedPuzzle> {
    let records = parse_records(text).context("Failed to parse record stream")?;
    decode(&records).context("Failed to decode record stream")
}

fn render_json(decoded: &DecodedPuzzle) -> Result<String> {
    let document = PuzzleDocument {
        puzzle: decoded.puzzle(),
        palette: &decoded.palette,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
