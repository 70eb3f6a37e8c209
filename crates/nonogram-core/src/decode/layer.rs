use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::record::{RecordReader, Reference, Segment};

/// One decoded pixel layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layer {
    /// Stream position of the segment count header
    pub header_index: usize,
    pub reference: Reference,
    pub segments: Vec<Segment>,
    #[serde(skip)]
    pub grid: Grid,
}

/// Decode one layer: segment count, reference, then the segments.
///
/// Every segment must be a non-empty run inside a `width` x `height` grid.
pub fn decode_layer(reader: &mut RecordReader<'_>, width: usize, height: usize) -> Result<Layer> {
    let header_index = reader.position();
    let count = reader.read_segment_count()?;
    let reference = reader.read_reference()?;
    debug!(
        "Layer at record {}: {} segments, reference at {}",
        header_index, count, reference.index
    );

    let mut grid = Grid::new(width, height);
    let mut segments = Vec::with_capacity(count.min(reader.remaining()));
    for _ in 0..count {
        let segment = reader.read_segment(&reference)?;
        paint_segment(&mut grid, &segment)?;
        segments.push(segment);
    }

    Ok(Layer {
        header_index,
        reference,
        segments,
        grid,
    })
}

/// Paint one segment, rejecting runs that are empty or leave the grid
pub fn paint_segment(grid: &mut Grid, segment: &Segment) -> Result<()> {
    let (start, end) = (segment.start, segment.end());
    if end <= start {
        return Err(Error::EmptySegment {
            index: segment.index,
            start,
            end,
        });
    }

    let color = u32::try_from(segment.color).map_err(|_| Error::InvalidSegmentColor {
        index: segment.index,
        color: segment.color,
    })?;

    let out_of_bounds = || Error::SegmentOutOfBounds {
        index: segment.index,
        row: segment.row,
        start,
        end,
        width: grid.width(),
        height: grid.height(),
    };
    let row = usize::try_from(segment.row)
        .ok()
        .filter(|&row| row < grid.height())
        .ok_or_else(out_of_bounds)?;
    let first = usize::try_from(start).map_err(|_| out_of_bounds())?;
    let last = usize::try_from(end)
        .ok()
        .filter(|&end| end <= grid.width())
        .ok_or_else(out_of_bounds)?;

    grid.paint(row, first, last, color);
    Ok(())
}
