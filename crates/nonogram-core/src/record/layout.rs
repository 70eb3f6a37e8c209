//! Record layout constants for packed puzzle streams
//!
//! Positions are record indices, not byte offsets. Everything after the
//! palette depends on the decoded palette size and segment counts.

/// Fixed header records
pub mod header {
    /// Record 0 is never interpreted
    pub const PREAMBLE: usize = 0;

    pub const WIDTH: usize = 1;
    pub const HEIGHT: usize = 2;
    pub const PALETTE_SIZE: usize = 3;

    /// Reference record for all palette entries
    pub const PALETTE_REFERENCE: usize = 4;

    /// First palette entry
    pub const PALETTE_START: usize = 5;
}

/// Segment count header of the primary pixel layer
pub const fn primary_layer(palette_size: usize) -> usize {
    header::PALETTE_START + palette_size
}

/// Segment count header of the optional second pixel layer
pub const fn second_layer(palette_size: usize, segment_count: usize) -> usize {
    primary_layer(palette_size) + 2 + segment_count
}
