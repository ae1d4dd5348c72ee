//! The solver-facing board representation
//!
//! [`Grid`] keeps the 81 cell masks in one flat owned array. Houses are pure
//! index views into that array (see [`House`]), so there is no aliasing to
//! maintain on clone: deriving `Clone` copies the masks and the empty-cell
//! list and nothing else can refer back into the original.

use crate::bitset::DigitSet;
use crate::board::{Cell, Digit, House, Sudoku};
use crate::errors::IllegalClues;

/// A 9×9 board in solving representation: one 9-bit mask per cell
/// (empty cells have mask 0, filled cells exactly one bit) plus the list
/// of currently empty cell positions.
///
/// The empty-cell list always contains exactly the positions whose mask
/// is zero. Every mutating operation preserves that equivalence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: [DigitSet; 81],
    pub(crate) empty_cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from the given clues.
    ///
    /// Returns `Err(IllegalClues)` if the clues already violate a row,
    /// column or block constraint. The solver relies on starting from a
    /// legal position and does not re-check it.
    pub fn from_sudoku(sudoku: &Sudoku) -> Result<Grid, IllegalClues> {
        let mut cells = [DigitSet::NONE; 81];
        let mut empty_cells = Vec::with_capacity(81);
        for (cell, clue) in Cell::all().zip(sudoku.iter()) {
            match clue {
                Some(num) => cells[cell.as_index()] = Digit::new(num).as_set(),
                None => empty_cells.push(cell),
            }
        }
        let grid = Grid { cells, empty_cells };
        if grid.is_legal() {
            Ok(grid)
        } else {
            Err(IllegalClues)
        }
    }

    /// Returns the digit in `cell`, or `None` if the cell is empty.
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.as_index()].into_iter().next()
    }

    /// Returns the number of currently empty cells.
    pub fn n_empty_cells(&self) -> usize {
        self.empty_cells.len()
    }

    /// Union of the digits present in `house`.
    pub fn house_digits(&self, house: House) -> DigitSet {
        let mut digits = DigitSet::NONE;
        for &cell in &house.cells() {
            digits |= self.cells[cell.as_index()];
        }
        digits
    }

    /// Digits not yet present in `house`.
    pub fn vacancies(&self, house: House) -> DigitSet {
        DigitSet::ALL.without(self.house_digits(house))
    }

    /// Digits that can still legally be placed in `cell`: the intersection
    /// of the vacancies of its row, column and block.
    ///
    /// Recomputed from the current masks on every call. The houses mutate
    /// as the board fills, a cached result would go stale.
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        let [row, col, block] = cell.houses();
        self.vacancies(row) & self.vacancies(col) & self.vacancies(block)
    }

    /// Checks that no house contains a digit twice.
    ///
    /// A duplicate collapses two set bits into one, so a house is legal
    /// exactly when its digit-union has as many bits as filled members.
    pub fn is_legal(&self) -> bool {
        House::all().all(|house| {
            let mut filled = 0u8;
            let mut digits = DigitSet::NONE;
            for &cell in &house.cells() {
                let mask = self.cells[cell.as_index()];
                if !mask.is_empty() {
                    filled += 1;
                    digits |= mask;
                }
            }
            digits.len() == filled
        })
    }

    /// Checks whether every cell is filled, i.e. every row contains all
    /// nine digits.
    pub fn is_filled(&self) -> bool {
        (0..9).all(|row| self.house_digits(House::row(row)).is_full())
    }

    /// Writes `digit` into `cell`.
    ///
    /// The caller has already taken `cell` out of the empty-cell list;
    /// this only stores the mask.
    pub(crate) fn place(&mut self, cell: Cell, digit: Digit) {
        debug_assert!(self.cells[cell.as_index()].is_empty());
        debug_assert!(!self.empty_cells.contains(&cell));
        self.cells[cell.as_index()] = digit.as_set();
    }

    /// Overwrites this grid with the state of `other`.
    ///
    /// The empty-cell list is rebuilt from the raw masks rather than
    /// copied wholesale, so the two grids share nothing afterwards.
    pub(crate) fn sync_from(&mut self, other: &Grid) {
        self.cells = other.cells;
        self.empty_cells.clear();
        for cell in Cell::all() {
            if self.cells[cell.as_index()].is_empty() {
                self.empty_cells.push(cell);
            }
        }
    }

    /// Converts the grid back into a [`Sudoku`], with 0 for empty cells.
    pub fn to_sudoku(&self) -> Sudoku {
        let mut bytes = [0; 81];
        for cell in Cell::all() {
            if let Some(digit) = self.digit(cell) {
                bytes[cell.as_index()] = digit.get();
            }
        }
        Sudoku(bytes)
    }
}
