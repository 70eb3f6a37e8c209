//! Packed puzzle decoding.
//!
//! Decoding runs in a fixed order over the record stream:
//!
//! 1. **Header**: width, height and palette size (records 1-3)
//! 2. **Palette**: reference record 4, then one entry per color
//! 3. **Primary layer**: segment count, reference, segments
//! 4. **Second layer** (optional): decoded with the same rules when records
//!    remain, checked for consistency, then dropped
//!
//! The primary layer grid is the only pixel data that reaches the clues.

mod header;
mod layer;
mod palette;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::grid::{EMPTY, Grid};
use crate::puzzle::{Layout, Puzzle};
use crate::record::{Record, RecordReader, layout};

pub use header::{Header, read_header};
pub use layer::{Layer, decode_layer, paint_segment};
pub use palette::{Palette, PaletteEntry, decode_palette};

/// Everything recovered from a packed record stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedPuzzle {
    pub header: Header,
    pub palette: Palette,
    pub layer: Layer,
    /// Segment count of the discarded second layer, if one was present
    pub second_layer_segments: Option<usize>,
}

impl DecodedPuzzle {
    pub fn grid(&self) -> &Grid {
        &self.layer.grid
    }

    pub fn is_multicolor(&self) -> bool {
        self.palette.is_multicolor()
    }

    /// Row and column clues of the primary layer
    pub fn puzzle(&self) -> Puzzle {
        Puzzle::from_grid(self.grid(), self.is_multicolor())
    }
}

/// Decode a packed record stream
pub fn decode(records: &[Record]) -> Result<DecodedPuzzle> {
    let mut reader = RecordReader::new(records);

    let header = read_header(&mut reader)?;
    let palette = decode_palette(&mut reader, header.palette_size)?;
    debug_assert_eq!(
        reader.position(),
        layout::primary_layer(header.palette_size)
    );

    let layer = decode_layer(&mut reader, header.width, header.height)?;
    warn_unknown_colors(&layer, &palette);

    let second_layer_segments = if reader.has_remaining() {
        debug_assert_eq!(
            reader.position(),
            layout::second_layer(header.palette_size, layer.segments.len())
        );
        let second = decode_layer(&mut reader, header.width, header.height)?;
        debug!(
            "Discarding second layer with {} segments",
            second.segments.len()
        );
        Some(second.segments.len())
    } else {
        None
    };

    Ok(DecodedPuzzle {
        header,
        palette,
        layer,
        second_layer_segments,
    })
}

/// Decode a packed record stream and render its clues
pub fn convert(records: &[Record], layout: Layout) -> Result<String> {
    let decoded = decode(records)?;
    Ok(decoded.puzzle().render(layout))
}

fn warn_unknown_colors(layer: &Layer, palette: &Palette) {
    for (index, color) in unknown_colors(layer, palette) {
        warn!(
            "Segment in record {} uses color {} which is not in the palette",
            index, color
        );
    }
}

/// `(record index, color)` of every painted segment whose color has no palette entry
fn unknown_colors(layer: &Layer, palette: &Palette) -> Vec<(usize, u32)> {
    layer
        .segments
        .iter()
        .filter_map(|segment| {
            let color = u32::try_from(segment.color).ok()?;
            (color != EMPTY && palette.find(color).is_none()).then_some((segment.index, color))
        })
        .collect()
}
