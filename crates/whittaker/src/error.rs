//! Error types for whittaker

use pbw_algebra::AlgebraError;
use thiserror::Error;

/// Result type alias for whittaker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the algebra or running the projector
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Row and column lists of a minor differ in length
    #[error("Number of rows ({rows}) should be equal to the number of columns ({cols})")]
    DimensionMismatch {
        /// Number of rows supplied
        rows: usize,
        /// Number of columns supplied
        cols: usize,
    },

    /// Matrix index outside [1, N]
    #[error("Index {index} out of range [1, {rank}]")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Dimension N
        rank: usize,
    },

    /// (i, j) does not name a strictly lower matrix unit
    #[error("Invalid pair ({i}, {j}): expected 1 <= j < i <= {rank}")]
    InvalidPair {
        /// Row index
        i: usize,
        /// Column index
        j: usize,
        /// Dimension N
        rank: usize,
    },

    /// Generator name that does not parse
    #[error("Invalid generator name: {0}")]
    InvalidGenerator(String),

    /// Prefix not among the representation copies
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Projector shift name outside u_2..u_N
    #[error("Unknown shift: {0}")]
    UnknownShift(String),

    /// Shift assignment that does not parse
    #[error("Invalid shift assignment: {0}")]
    InvalidShift(String),

    /// The series expansion exceeded its filtration bound
    #[error("Series for E_{i}_{j} did not terminate within {bound} steps")]
    SeriesDiverged {
        /// Row index
        i: usize,
        /// Column index
        j: usize,
        /// Iteration cap that was hit
        bound: usize,
    },

    /// Algebra engine error
    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
