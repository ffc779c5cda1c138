use thiserror::Error;

/// Errors raised while building, reading or compositing grids
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Requested grid has zero rows or zero columns
    #[error("invalid grid dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },

    /// A cell access or overlay fell outside the grid
    #[error("cell ({row}, {col}) is out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Nested input rows did not all have the same length
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("color 0x{0:x} does not fit in 24 bits")]
    ColorOutOfRange(u32),

    #[error("unknown color '{0}' (expected a color name or a hex value like 0xff0000)")]
    UnknownColor(String),
}
