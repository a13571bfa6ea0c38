//! Error types for quasi-random sequence sources.

use thiserror::Error;

/// Errors raised by a low-discrepancy sequence source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Requested dimension is not positive.
    #[error("Invalid sequence dimension {0}: must be at least 1")]
    InvalidDimension(usize),

    /// A coordinate was requested before any point was generated.
    #[error("No point generated yet: call next_point() before coordinate()")]
    NoPointGenerated,

    /// Coordinate index outside `[1, dimension]`.
    #[error("Coordinate {index} out of range [1, {dimension}]")]
    CoordinateOutOfRange {
        /// Requested 1-based coordinate
        index: usize,
        /// Sequence dimension
        dimension: usize,
    },
}
