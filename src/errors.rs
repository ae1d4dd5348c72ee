//! Errors returned when reading or solving a sudoku

/// Error for [`Sudoku::from_bytes`](crate::Sudoku::from_bytes)
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Sudoku::from_bytes_slice`](crate::Sudoku::from_bytes_slice)
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid entries
    #[error(transparent)]
    FromBytesError(FromBytesError),
}

/// Error for [`Sudoku::from_str_line`](crate::Sudoku::from_str_line)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are numbers 1...9 and '0', '.' or '_' for empty cells
    #[error("cell {cell} contains invalid character '{ch}'")]
    InvalidEntry {
        /// Cell number goes from 0..=80, 0..=8 for first line, 9..=17 for 2nd and so on
        cell: u8,
        /// The parsed invalid char
        ch: char,
    },
    /// Returns number of cells supplied
    #[error("sudoku contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// Returned if >=82 cells are supplied
    #[error("sudoku contains more than 81 cells")]
    TooManyCells,
}

/// The given clues violate a constraint even before solving.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("the given clues already violate a row, column or block constraint")]
pub struct IllegalClues;

/// The sudoku has no solution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("sudoku has no solution")]
pub struct Unsolvable;
