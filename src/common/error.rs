//! Error types for grid construction, indexing and direction decoding

use std::cell::BorrowMutError;
use std::fmt;

use crate::spatial::position::Pos;

/// Main error type for all grid operations
///
/// Reading a cell outside the grid is not an error: lookups report it as
/// [`Lookup::OutOfBounds`](crate::board::lookup::Lookup::OutOfBounds) so that
/// directional walks can stop at the board edge. The variants below cover
/// caller mistakes only.
#[derive(Debug)]
pub enum GridError {
    /// Linear row-major index outside `0..x_size * y_size`
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of cells in the grid
        len: usize,
    },

    /// Position outside the grid rectangle where one was required
    PositionOutOfRange {
        /// The rejected position
        pos: Pos,
        /// Grid width
        x_size: usize,
        /// Grid height
        y_size: usize,
    },

    /// Raw value that does not name one of the eight directions
    UnknownDirection {
        /// Textual form of the rejected value
        value: String,
    },

    /// Grid dimensions rejected at construction
    InvalidDimensions {
        /// Requested width
        x_size: usize,
        /// Requested height
        y_size: usize,
        /// Explanation of why the dimensions are invalid
        reason: &'static str,
    },

    /// Shared storage is already borrowed, e.g. a write issued from inside a
    /// `for_each` callback on an alias of the same grid
    StorageBusy {
        /// Underlying borrow failure
        source: BorrowMutError,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} is out of range (grid has {len} cells)")
            }
            Self::PositionOutOfRange {
                pos,
                x_size,
                y_size,
            } => {
                write!(
                    f,
                    "Position {pos} is outside the grid (size {x_size}x{y_size})"
                )
            }
            Self::UnknownDirection { value } => {
                write!(f, "Unknown direction '{value}'")
            }
            Self::InvalidDimensions {
                x_size,
                y_size,
                reason,
            } => {
                write!(f, "Invalid grid dimensions {x_size}x{y_size}: {reason}")
            }
            Self::StorageBusy { source } => {
                write!(f, "Grid storage is already borrowed: {source}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::StorageBusy { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BorrowMutError> for GridError {
    fn from(source: BorrowMutError) -> Self {
        Self::StorageBusy { source }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create a position out of range error
pub const fn position_out_of_range(pos: Pos, x_size: usize, y_size: usize) -> GridError {
    GridError::PositionOutOfRange {
        pos,
        x_size,
        y_size,
    }
}

/// Create an unknown direction error
pub fn unknown_direction(value: &impl ToString) -> GridError {
    GridError::UnknownDirection {
        value: value.to_string(),
    }
}
