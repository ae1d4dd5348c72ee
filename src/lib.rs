#![warn(missing_docs)]
//! A sudoku solver built on bitmask candidate sets.
//!
//! ## Overview
//!
//! Every cell of the 9x9 board is a 9-bit mask of digits. Solving runs in
//! two layers: [`simple_fill`] repeatedly resolves cells with exactly one
//! legal candidate, and [`Solver`] falls back to depth-first search with
//! copy-on-branch backtracking when propagation stalls.
//!
//! ## Example
//!
//! ```
//! use simplefill::Sudoku;
//!
//! let line = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
//!
//! let sudoku = Sudoku::from_str_line(line).unwrap();
//! if let Some(solution) = sudoku.solve_one() {
//!     println!("{}", solution);
//!     println!("{}", solution.to_str_line());
//! }
//! ```

mod bitset;
mod board;
pub mod errors;
mod solver;

pub use crate::bitset::DigitSet;
pub use crate::board::{Cell, Digit, Grid, House, Sudoku, SudokuLine};
pub use crate::solver::{simple_fill, FillResult, Guess, SolveObserver, Solver};
