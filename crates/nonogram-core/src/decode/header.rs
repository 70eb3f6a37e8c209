use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::record::{RecordReader, layout};

/// Largest grid the decoder will allocate
pub const MAX_CELLS: i64 = 1 << 24;

/// Puzzle dimensions and palette size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    pub width: usize,
    pub height: usize,
    pub palette_size: usize,
}

/// Read the header records (1, 2, 3), leaving the cursor on the palette reference
pub fn read_header(reader: &mut RecordReader<'_>) -> Result<Header> {
    reader.skip(layout::header::WIDTH - layout::header::PREAMBLE);

    let width = reader.read_dimension()?;
    let height = reader.read_dimension()?;
    let palette_size = reader.read_dimension()?;
    debug!(
        "Header: width={}, height={}, palette_size={}",
        width, height, palette_size
    );

    let header = Header {
        width: to_count("width", width, 0)?,
        height: to_count("height", height, 0)?,
        palette_size: to_count("palette_size", palette_size, 1)?,
    };

    let cells = width.checked_mul(height).unwrap_or(i64::MAX);
    if cells > MAX_CELLS {
        return Err(Error::InvalidHeader {
            field: "cells",
            value: cells,
        });
    }

    Ok(header)
}

fn to_count(field: &'static str, value: i64, min: usize) -> Result<usize> {
    usize::try_from(value)
        .ok()
        .filter(|&count| count >= min)
        .ok_or(Error::InvalidHeader { field, value })
}
