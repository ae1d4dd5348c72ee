use crate::board::grid::Grid;
use crate::errors::{FromBytesError, FromBytesSliceError, LineParseError};
use crate::solver::Solver;

use std::convert::TryInto;
use std::{fmt, iter, ops, slice, str};

/// The main structure exposing all the functionality of the library
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Sudoku(pub(crate) [u8; 81]);

/// Iterator over the cells of a [`Sudoku`], yielding `None` for empty cells
pub type Iter<'a> = iter::Map<slice::Iter<'a, u8>, fn(&u8) -> Option<u8>>;

impl Sudoku {
    /// Creates a sudoku from a byte array. All numbers must be below 10,
    /// with 0 marking an empty cell.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, FromBytesError> {
        if bytes.iter().all(|&byte| byte <= 9) {
            Ok(Sudoku(bytes))
        } else {
            Err(FromBytesError(()))
        }
    }

    /// Creates a sudoku from a byte slice. The slice must have length 81
    /// and all numbers must be below 10, with 0 marking an empty cell.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        let bytes: [u8; 81] = bytes
            .try_into()
            .map_err(|_| FromBytesSliceError::WrongLength(bytes.len()))?;
        Sudoku::from_bytes(bytes).map_err(FromBytesSliceError::FromBytesError)
    }

    /// Reads a sudoku in the line format: 81 cells from left to right, top
    /// to bottom, with `1..=9` for clues and `0`, `.` or `_` for empty cells.
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        let mut grid = [0; 81];
        let mut n_cells = 0usize;
        for ch in s.chars() {
            if n_cells == 81 {
                return Err(LineParseError::TooManyCells);
            }
            let num = match ch {
                '1'..='9' => ch as u8 - b'0',
                '0' | '.' | '_' => 0,
                _ => {
                    return Err(LineParseError::InvalidEntry {
                        cell: n_cells as u8,
                        ch,
                    })
                }
            };
            grid[n_cells] = num;
            n_cells += 1;
        }
        if n_cells < 81 {
            return Err(LineParseError::NotEnoughCells(n_cells as u8));
        }
        Ok(Sudoku(grid))
    }

    /// Returns the cell contents as a byte array, 0 for empty cells.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the sudoku in the 81-character line format.
    pub fn to_str_line(&self) -> SudokuLine {
        let mut chars = [0; 81];
        for (char_, &byte) in chars.iter_mut().zip(self.0.iter()) {
            *char_ = match byte {
                0 => b'.',
                num => num + b'0',
            };
        }
        SudokuLine(chars)
    }

    /// Returns an Iterator over sudoku, going from left to right, top to bottom
    pub fn iter(&self) -> Iter {
        self.0.iter().map(num_to_opt)
    }

    /// Returns the number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Checks whether the clues are consistent, i.e. no row, column or
    /// block contains a digit twice. This is the precondition for solving;
    /// an inconsistent sudoku is rejected before the solver runs.
    pub fn clues_are_legal(&self) -> bool {
        Grid::from_sudoku(self).is_ok()
    }

    /// Check whether the sudoku is solved.
    pub fn is_solved(&self) -> bool {
        match Grid::from_sudoku(self) {
            Ok(grid) => grid.is_filled(),
            Err(_) => false,
        }
    }

    /// Try to find a solution to the sudoku and fill it in. Return true if a solution was found.
    /// This is a convenience interface. Use one of the other solver methods for better error handling
    pub fn solve(&mut self) -> bool {
        match self.solve_one() {
            Some(solution) => {
                *self = solution;
                true
            }
            None => false,
        }
    }

    /// Find a solution to the sudoku and return it.
    ///
    /// Returns `None` if the clues are inconsistent or no completion
    /// exists. If multiple solutions exist, an arbitrary one is returned.
    pub fn solve_one(self) -> Option<Sudoku> {
        let mut grid = Grid::from_sudoku(&self).ok()?;
        match Solver::new().solve(&mut grid) {
            Ok(()) => Some(grid.to_sudoku()),
            Err(_) => None,
        }
    }
}

fn num_to_opt(num: &u8) -> Option<u8> {
    if *num == 0 {
        None
    } else {
        Some(*num)
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, &num) in self.0.iter().enumerate() {
            let (row, col) = (index / 9, index % 9);
            match (row, col) {
                (0, 0) => (),
                (_, 3) | (_, 6) => write!(f, " ")?, // separate blocks in columns
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate blocks in rows
                (_, 0) => writeln!(f)?,
                _ => (),
            }
            match num {
                0 => write!(f, "_")?,
                1..=9 => write!(f, "{}", num)?,
                _ => unreachable!(),
            }
        }
        Ok(())
    }
}

/// The 81-character line representation of a [`Sudoku`].
///
/// Empty cells are printed as `.`. Dereferences into a `&str`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SudokuLine([u8; 81]);

impl ops::Deref for SudokuLine {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        // the buffer is filled with '.' and ascii digits only
        str::from_utf8(&self.0).expect("line is not ascii")
    }
}

impl fmt::Display for SudokuLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &**self)
    }
}

impl fmt::Debug for SudokuLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Sudoku;
    use serde::de::{Error, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Sudoku {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_str_line())
        }
    }

    struct SudokuVisitor;

    impl<'de> Visitor<'de> for SudokuVisitor {
        type Value = Sudoku;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a sudoku in the 81-character line format")
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
            Sudoku::from_str_line(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Sudoku {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(SudokuVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LineParseError;

    const PUZZLE: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    #[test]
    fn line_roundtrip() {
        let sudoku = Sudoku::from_str_line(PUZZLE).unwrap();
        assert_eq!(&*sudoku.to_str_line(), PUZZLE);
        assert_eq!(sudoku.n_clues(), 30);
    }

    #[test]
    fn rejects_short_line() {
        assert_eq!(
            Sudoku::from_str_line("123"),
            Err(LineParseError::NotEnoughCells(3))
        );
    }

    #[test]
    fn rejects_long_line() {
        let line: String = std::iter::repeat('.').take(82).collect();
        assert_eq!(Sudoku::from_str_line(&line), Err(LineParseError::TooManyCells));
    }

    #[test]
    fn length_error_beats_invalid_char() {
        // the 82nd character is invalid, but the line is over-length first
        let mut line: String = std::iter::repeat('.').take(81).collect();
        line.push('x');
        assert_eq!(Sudoku::from_str_line(&line), Err(LineParseError::TooManyCells));
    }

    #[test]
    fn rejects_invalid_char() {
        let mut line = PUZZLE.to_string();
        line.replace_range(4..5, "x");
        assert_eq!(
            Sudoku::from_str_line(&line),
            Err(LineParseError::InvalidEntry { cell: 4, ch: 'x' })
        );
    }

    #[test]
    fn empty_cell_markers_are_equivalent() {
        let dots = Sudoku::from_str_line(PUZZLE).unwrap();
        let zeros: String = PUZZLE.replace('.', "0");
        let underscores: String = PUZZLE.replace('.', "_");
        assert_eq!(dots, Sudoku::from_str_line(&zeros).unwrap());
        assert_eq!(dots, Sudoku::from_str_line(&underscores).unwrap());
    }

    #[test]
    fn from_bytes_rejects_big_entries() {
        let mut bytes = [0; 81];
        bytes[17] = 10;
        assert!(Sudoku::from_bytes(bytes).is_err());
        assert!(Sudoku::from_bytes_slice(&[1, 2, 3]).is_err());
    }
}
