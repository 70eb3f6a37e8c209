use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Truncated puzzle stream: record {index} requested, stream has {len} records")]
    TruncatedStream { index: usize, len: usize },

    #[error("Zero modulus in record {index}")]
    ZeroModulus { index: usize },

    #[error("Invalid header field {field}: {value}")]
    InvalidHeader { field: &'static str, value: i64 },

    #[error("Empty or negative segment in record {index}: start {start}, end {end}")]
    EmptySegment { index: usize, start: i64, end: i64 },

    #[error("Invalid segment color in record {index}: {color}")]
    InvalidSegmentColor { index: usize, color: i64 },

    #[error(
        "Segment in record {index} out of bounds: row {row}, columns {start}..{end} on a {width}x{height} grid"
    )]
    SegmentOutOfBounds {
        index: usize,
        row: i64,
        start: i64,
        end: i64,
        width: usize,
        height: usize,
    },

    #[error("Invalid record source: {0}")]
    InvalidRecordSource(String),

    #[error("Invalid bitmap cell at row {row}, column {column}")]
    InvalidBitmapCell { row: usize, column: usize },

    #[error("Ragged bitmap: row {row} has {actual} cells, expected {expected}")]
    RaggedBitmap {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Empty bitmap")]
    EmptyBitmap,

    #[error("Invalid clue text: {0}")]
    InvalidClueText(String),

    #[error("Incompatible clue for {axis} {index}: needs {required} cells, line has {available}")]
    IncompatibleClue {
        axis: &'static str,
        index: usize,
        required: usize,
        available: usize,
    },

    #[error("Too many colors for the solver: {0}")]
    TooManyColors(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error means the packed record stream is malformed
    pub fn is_malformed_stream(&self) -> bool {
        matches!(
            self,
            Error::TruncatedStream { .. }
                | Error::ZeroModulus { .. }
                | Error::InvalidHeader { .. }
                | Error::EmptySegment { .. }
                | Error::InvalidSegmentColor { .. }
                | Error::SegmentOutOfBounds { .. }
        )
    }
}
