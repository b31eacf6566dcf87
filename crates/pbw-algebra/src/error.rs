//! Error types for pbw-algebra

use thiserror::Error;

/// Result type alias for pbw-algebra operations
pub type Result<T> = std::result::Result<T, AlgebraError>;

/// Errors that can occur while building or evaluating in a PBW algebra
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Generator label not declared in the structure
    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    /// Generator label declared twice
    #[error("Duplicate generator: {0}")]
    DuplicateGenerator(String),

    /// Supplied basis ordering is not a permutation of the generators
    #[error("Invalid basis ordering: {0}")]
    InvalidOrdering(String),

    /// Division by a non-unit coefficient
    #[error("Element is not invertible: {0}")]
    NotInvertible(String),

    /// Generator index outside the basis
    #[error("Generator index {index} out of range [0, {len})")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Number of generators
        len: usize,
    },
}
