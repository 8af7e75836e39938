//! Pattern and grid validation errors.

/// Why a seed pattern or grid was rejected.
///
/// Construction never falls back to a default pattern: a bad name or a
/// malformed matrix is reported to the caller as one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("cell ({x}, {y}) has value {value}, expected 0 or 1")]
    InvalidCell { x: usize, y: usize, value: u8 },
}
