//! Positions of cells and houses on the 9×9 board
//!
//! A [`Cell`] is an index into the flat 81-slot grid. A [`House`] is one of
//! the 27 groups of 9 cells (rows, then columns, then blocks) that must each
//! contain a digit at most once. Houses never own cells, they only resolve to
//! indices into the grid, so a mutation seen through one house is seen
//! through all of them.

use std::fmt;

#[cfg_attr(rustfmt, rustfmt_skip)]
static BLOCK: [u8; 81] = [
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
];

/// One of the 81 cell positions, counted from left to right, top to bottom.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Constructs a new `Cell` from an index.
    ///
    /// # Panic
    /// Panics, if the index is not in the range of `0..81`.
    pub fn new(index: u8) -> Self {
        assert!(index < 81);
        Cell(index)
    }

    /// Constructs a new `Cell`. Returns `None`, if the index is not in the range of `0..81`.
    pub fn new_checked(index: u8) -> Option<Self> {
        if index < 81 {
            Some(Cell(index))
        } else {
            None
        }
    }

    /// Constructs the cell at the given row and column, both in `0..9`.
    pub fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Cell(row * 9 + col)
    }

    /// Returns an iterator over all cells, going from left to right, top to bottom.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Cell)
    }

    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 9
    }

    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % 9
    }

    /// Block index from 0..=8, numbering from left to right, top to bottom
    #[inline]
    pub fn block(self) -> u8 {
        BLOCK[self.0 as usize]
    }

    /// Returns the cell index as `usize` for array access.
    #[inline]
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Returns the three houses this cell belongs to.
    pub fn houses(self) -> [House; 3] {
        [
            House::row(self.row()),
            House::col(self.col()),
            House::block(self.block()),
        ]
    }
}

/// One of the 27 houses: rows 0..=8, columns 9..=17, blocks 18..=26.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct House(u8);

impl House {
    /// Constructs the house for the given row index in `0..9`.
    pub fn row(row: u8) -> Self {
        assert!(row < 9);
        House(row)
    }

    /// Constructs the house for the given column index in `0..9`.
    pub fn col(col: u8) -> Self {
        assert!(col < 9);
        House(col + 9)
    }

    /// Constructs the house for the given block index in `0..9`.
    pub fn block(block: u8) -> Self {
        assert!(block < 9);
        House(block + 18)
    }

    /// Returns an iterator over all 27 houses.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..27).map(House)
    }

    /// Returns the house index as `usize`, rows before columns before blocks.
    #[inline]
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Returns the 9 member cells of this house.
    pub fn cells(self) -> [Cell; 9] {
        let mut cells = [Cell(0); 9];
        match self.0 {
            row @ 0..=8 => {
                for (i, cell) in cells.iter_mut().enumerate() {
                    *cell = Cell(row * 9 + i as u8);
                }
            }
            col @ 9..=17 => {
                for (i, cell) in cells.iter_mut().enumerate() {
                    *cell = Cell(i as u8 * 9 + (col - 9));
                }
            }
            block => {
                debug_assert!(block < 27);
                let block = block - 18;
                let first = (block / 3) * 27 + (block % 3) * 3;
                for (i, cell) in cells.iter_mut().enumerate() {
                    *cell = Cell(first + (i as u8 / 3) * 9 + i as u8 % 3);
                }
            }
        }
        cells
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "r{}c{}", self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_matches_arithmetic() {
        for cell in Cell::all() {
            assert_eq!(cell.block(), (cell.row() / 3) * 3 + cell.col() / 3);
        }
    }

    #[test]
    fn every_cell_in_three_houses() {
        for cell in Cell::all() {
            let mut containing = 0;
            for house in House::all() {
                if house.cells().contains(&cell) {
                    containing += 1;
                }
            }
            assert_eq!(containing, 3);
        }
    }

    #[test]
    fn house_members() {
        let row_cells = House::row(0).cells();
        assert!(row_cells.iter().all(|c| c.row() == 0));
        let col_cells = House::col(4).cells();
        assert!(col_cells.iter().all(|c| c.col() == 4));
        let block_cells = House::block(4).cells();
        assert!(block_cells
            .iter()
            .all(|c| (3..6).contains(&c.row()) && (3..6).contains(&c.col())));
    }
}
