//! Error types for board construction and parsing.

use std::error::Error;
use std::fmt;

/// Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors raised when constructing or parsing a board.
///
/// A [`crate::Board`] that exists always satisfies the permutation
/// invariant, so these only occur at the construction boundary; no later
/// operation can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The grid has no rows, or a zero dimension was requested.
    Empty,
    /// A row's length does not match the grid dimension.
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A tile value lies outside `0..n²`.
    TileOutOfRange { value: u32, max: u32 },
    /// A tile value appears more than once.
    DuplicateTile { value: u32 },
    /// A token in the text form is not a valid integer.
    InvalidToken(String),
    /// The text form does not contain exactly `n²` tiles.
    TileCountMismatch { expected: usize, found: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board grid is empty"),
            Self::RaggedRow { row, len, expected } => {
                write!(f, "row {row} has {len} tiles, expected {expected}")
            }
            Self::TileOutOfRange { value, max } => {
                write!(f, "tile value {value} is out of range 0..={max}")
            }
            Self::DuplicateTile { value } => {
                write!(f, "tile value {value} appears more than once")
            }
            Self::InvalidToken(token) => write!(f, "invalid tile token '{token}'"),
            Self::TileCountMismatch { expected, found } => {
                write!(f, "expected {expected} tiles, found {found}")
            }
        }
    }
}

impl Error for BoardError {}
