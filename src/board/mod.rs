//! Types for cells, digits and other things on a sudoku board
mod digit;
mod grid;
pub mod positions;
mod sudoku;

pub use self::{
    digit::Digit,
    grid::Grid,
    positions::{Cell, House},
    sudoku::{Sudoku, SudokuLine},
};
