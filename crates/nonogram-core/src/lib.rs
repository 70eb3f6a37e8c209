//! # nonogram-core
//!
//! Core library for the nonoconv puzzle converter.
//!
//! This crate provides:
//! - Packed record streams (`Record`, `RecordReader`) and their loaders
//! - Decoding of header, palette and segment layers into a pixel grid
//! - Row and column clue extraction with HTML and plain text rendering
//! - Parsing of rendered clue text back into a `Puzzle`
//! - A line-propagating backtracking solver
//! - 0/1 bitmap conversion and terminal previews

pub mod bitmap;
pub mod clue;
pub mod decode;
pub mod error;
pub mod grid;
pub mod preview;
pub mod puzzle;
pub mod record;
pub mod solver;
pub mod source;

pub use bitmap::{bitmap_puzzle, parse_bitmap};
pub use clue::{Clue, ClueLine, extract_clues, min_length};
pub use decode::{DecodedPuzzle, Header, Layer, Palette, PaletteEntry, convert, decode};
pub use error::{Error, Result};
pub use grid::{Axis, EMPTY, Grid};
pub use preview::render_preview;
pub use puzzle::{Layout, Puzzle};
pub use record::{Record, RecordReader, Reference, Segment};
pub use solver::{SolveOutcome, SolverOptions, render_solution, solve};
pub use source::{load_records, parse_records};
