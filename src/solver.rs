//! Constraint propagation and backtracking search
//!
//! Solving happens in two layers. [`simple_fill`] resolves every empty cell
//! that has exactly one legal candidate and reports whether it made
//! progress; running it to a fixpoint is what cracks easy sudokus outright.
//! When the fixpoint stalls with cells still open, [`Solver`] picks one of
//! them and tries each candidate digit on a cloned grid, recursing. Sibling
//! branches never see each other's tentative digits because every branch
//! works on its own clone; only a fully solved clone is synced back.
//!
//! Recursion depth is bounded by the number of empty cells (every guess
//! fills at least one), so the plain call stack is sufficient.

use crate::board::{Cell, Digit, Grid};
use crate::errors::Unsolvable;

/// Outcome of a single [`simple_fill`] pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FillResult {
    /// No empty cell had exactly one candidate; the grid is unchanged.
    NoUpdate,
    /// At least one cell was filled. Another pass may find more.
    Update,
    /// Some empty cell has no candidate left; the grid is unsolvable
    /// in its current state.
    Conflict,
}

/// A tentative digit assignment, as reported to a [`SolveObserver`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Guess {
    /// The digit being tried
    pub digit: Digit,
    /// The cell it is written into
    pub cell: Cell,
    /// Nesting depth of the guess, 1 for the first guess
    pub depth: usize,
    /// Number of cells still empty after this assignment
    pub n_empty_cells: usize,
}

/// Receiver for solver progress notifications.
///
/// All methods default to doing nothing; the solver's behavior does not
/// depend on whether anything listens. `()` is the silent observer.
pub trait SolveObserver {
    /// A propagation fixpoint filled `n_cells` cells.
    fn on_simple_fill(&mut self, n_cells: usize) {
        let _ = n_cells;
    }

    /// A digit was guessed and a new search branch opened.
    fn on_guess(&mut self, guess: Guess) {
        let _ = guess;
    }
}

impl SolveObserver for () {}

/// Fills every empty cell with exactly one candidate, once over the grid.
///
/// The empty-cell list is sorted so that the most constrained cells sit at
/// its tail and are popped first. Scanning stops at the first cell with
/// more than one candidate, which is pushed back; the caller detects "no
/// progress" from the returned [`FillResult`] and must loop until the pass
/// stops reporting [`FillResult::Update`], since each filled cell can turn
/// neighbors into new single-candidate cells.
pub fn simple_fill(grid: &mut Grid) -> FillResult {
    let mut result = FillResult::NoUpdate;

    let mut empty_cells = std::mem::take(&mut grid.empty_cells);
    empty_cells.sort_unstable_by_key(|&cell| std::cmp::Reverse(grid.candidates(cell).len()));

    while let Some(cell) = empty_cells.pop() {
        match grid.candidates(cell).unique() {
            Ok(Some(digit)) => {
                grid.place(cell, digit);
                result = FillResult::Update;
            }
            Ok(None) => {
                // no trivial progress left this pass
                empty_cells.push(cell);
                break;
            }
            Err(_) => {
                empty_cells.push(cell);
                grid.empty_cells = empty_cells;
                return FillResult::Conflict;
            }
        }
    }

    grid.empty_cells = empty_cells;
    result
}

/// Depth-first sudoku search with copy-on-branch backtracking.
pub struct Solver<O = ()> {
    observer: O,
}

impl Solver<()> {
    /// Creates a solver without an observer.
    pub fn new() -> Self {
        Solver { observer: () }
    }
}

impl Default for Solver<()> {
    fn default() -> Self {
        Solver::new()
    }
}

impl<O: SolveObserver> Solver<O> {
    /// Creates a solver that reports progress to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Solver { observer }
    }

    /// Consumes the solver and returns the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Solves `grid` in place.
    ///
    /// On success the grid is fully filled and legal. On failure the grid
    /// is left in its last propagated state, which is partially filled but
    /// not a solution.
    pub fn solve(&mut self, grid: &mut Grid) -> Result<(), Unsolvable> {
        self.solve_at_depth(grid, 0)
    }

    fn solve_at_depth(&mut self, grid: &mut Grid, depth: usize) -> Result<(), Unsolvable> {
        let n_empty_before = grid.n_empty_cells();

        let mut fill_result = FillResult::Update;
        while fill_result == FillResult::Update {
            fill_result = simple_fill(grid);
        }
        if fill_result == FillResult::Conflict {
            return Err(Unsolvable);
        }

        let n_filled = n_empty_before - grid.n_empty_cells();
        if n_filled > 0 {
            self.observer.on_simple_fill(n_filled);
        }

        if grid.is_filled() {
            return Ok(());
        }

        // propagation stalled: every remaining empty cell has >=2 candidates
        let cell = match grid.empty_cells.pop() {
            Some(cell) => cell,
            None => return Err(Unsolvable),
        };
        for digit in grid.candidates(cell) {
            let mut trial = grid.clone();
            trial.place(cell, digit);
            self.observer.on_guess(Guess {
                digit,
                cell,
                depth: depth + 1,
                n_empty_cells: trial.n_empty_cells(),
            });
            if self.solve_at_depth(&mut trial, depth + 1).is_ok() {
                grid.sync_from(&trial);
                return Ok(());
            }
        }
        grid.empty_cells.push(cell);
        Err(Unsolvable)
    }
}
