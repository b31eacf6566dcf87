//! Generator identities
//!
//! Every basis element of the algebra is either a matrix unit `E_i_j` of
//! gl(N) or a coordinate `prefix_k` of one copy of the vector representation.
//! The tagged variant is the identity used throughout the bracket table, the
//! basis ordering and the character; the `E_1_2` / `u_3` spellings exist only
//! for display and parsing.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Name of a basis generator
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Generator {
    /// Matrix unit E_{row,col} of gl(N), 1-based
    MatrixUnit {
        /// Row index
        row: usize,
        /// Column index
        col: usize,
    },
    /// k-th coordinate of the vector representation named `prefix`, 1-based
    Vector {
        /// Name of the representation copy
        prefix: String,
        /// Coordinate index
        index: usize,
    },
}

impl Generator {
    /// E_{row,col}
    pub fn matrix_unit(row: usize, col: usize) -> Self {
        Generator::MatrixUnit { row, col }
    }

    /// prefix_index
    pub fn vector(prefix: impl Into<String>, index: usize) -> Self {
        Generator::Vector {
            prefix: prefix.into(),
            index,
        }
    }

    /// Strictly lower-triangular matrix unit (row > col)
    pub fn is_nilpotent(&self) -> bool {
        matches!(self, Generator::MatrixUnit { row, col } if row > col)
    }

    /// Diagonal matrix unit
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Generator::MatrixUnit { row, col } if row == col)
    }

    /// Strictly upper-triangular matrix unit (row < col)
    pub fn is_raising(&self) -> bool {
        matches!(self, Generator::MatrixUnit { row, col } if row < col)
    }

    /// Degree in the Kazhdan filtration of gl(N) ⋉ (C^N)^m
    ///
    /// `E_i_j ↦ 1 + j - i` and `prefix_k ↦ N - k`. Brackets lower the sum of
    /// degrees by one, and the character ψ preserves it.
    pub fn kazhdan_degree(&self, rank: usize) -> i64 {
        match self {
            Generator::MatrixUnit { row, col } => 1 + *col as i64 - *row as i64,
            Generator::Vector { index, .. } => rank as i64 - *index as i64,
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::MatrixUnit { row, col } => write!(f, "E_{}_{}", row, col),
            Generator::Vector { prefix, index } => write!(f, "{}_{}", prefix, index),
        }
    }
}

impl FromStr for Generator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidGenerator(s.to_string());
        let number = |part: &str| part.parse::<usize>().map_err(|_| invalid());

        if let Some(rest) = s.strip_prefix("E_") {
            let (row, col) = rest.split_once('_').ok_or_else(invalid)?;
            return Ok(Generator::matrix_unit(number(row)?, number(col)?));
        }

        let (prefix, index) = s.rsplit_once('_').ok_or_else(invalid)?;
        if prefix.is_empty() || prefix.contains('_') {
            return Err(invalid());
        }
        Ok(Generator::vector(prefix, number(index)?))
    }
}
