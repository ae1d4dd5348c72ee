use simplefill::errors::LineParseError;
use simplefill::{Guess, SolveObserver, Solver, Sudoku};

use proptest::prelude::*;

const PUZZLE: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
const SOLUTION: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

// needs backtracking, propagation alone stalls
const HARD: &str =
    "..............3.85..1.2.......5.7.....4...1...9.......5......73..2.1........4...9";

// same as PUZZLE with the first clue changed from 5 to 1; the clues are
// legal but no completion exists
const UNSOLVABLE: &str =
    "13..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

#[test]
fn solves_classic_puzzle() {
    let sudoku = Sudoku::from_str_line(PUZZLE).unwrap();
    let solution = sudoku.solve_one().unwrap();
    assert_eq!(&*solution.to_str_line(), SOLUTION);
    assert!(solution.is_solved());
}

#[test]
fn solve_fills_in_place() {
    let mut sudoku = Sudoku::from_str_line(PUZZLE).unwrap();
    assert!(sudoku.solve());
    assert_eq!(&*sudoku.to_str_line(), SOLUTION);
}

#[test]
fn solves_hard_puzzle() {
    let sudoku = Sudoku::from_str_line(HARD).unwrap();
    let solution = sudoku.solve_one().unwrap();
    assert!(solution.is_solved());
    // the solution extends the clues
    for (given, solved) in sudoku.iter().zip(solution.iter()) {
        if let Some(digit) = given {
            assert_eq!(solved, Some(digit));
        }
    }
}

#[test]
fn solves_empty_board() {
    let empty: String = std::iter::repeat('.').take(81).collect();
    let sudoku = Sudoku::from_str_line(&empty).unwrap();
    let solution = sudoku.solve_one().unwrap();
    assert!(solution.is_solved());
}

#[test]
fn unsolvable_puzzle_has_no_solution() {
    let sudoku = Sudoku::from_str_line(UNSOLVABLE).unwrap();
    assert!(sudoku.clues_are_legal());
    assert!(sudoku.solve_one().is_none());

    let mut sudoku = sudoku;
    assert!(!sudoku.solve());
    // a failed solve leaves the sudoku untouched
    assert_eq!(&*sudoku.to_str_line(), UNSOLVABLE);
}

#[test]
fn illegal_clues_are_rejected() {
    // two 5s in the top row
    let mut line = PUZZLE.to_string();
    line.replace_range(2..3, "5");
    let sudoku = Sudoku::from_str_line(&line).unwrap();
    assert!(!sudoku.clues_are_legal());
    assert!(sudoku.solve_one().is_none());
}

#[test]
fn solved_sudoku_is_its_own_solution() {
    let solved = Sudoku::from_str_line(SOLUTION).unwrap();
    assert!(solved.is_solved());
    assert_eq!(solved.solve_one(), Some(solved));

    let unsolved = Sudoku::from_str_line(PUZZLE).unwrap();
    assert!(!unsolved.is_solved());
}

#[test]
fn parse_errors_are_reported() {
    assert_eq!(
        Sudoku::from_str_line("123"),
        Err(LineParseError::NotEnoughCells(3))
    );
    let mut line = PUZZLE.to_string();
    line.replace_range(10..11, "?");
    assert!(matches!(
        Sudoku::from_str_line(&line),
        Err(LineParseError::InvalidEntry { cell: 10, ch: '?' })
    ));
}

#[test]
fn observer_reports_consistent_progress() {
    struct Recording {
        guesses: Vec<Guess>,
        filled: usize,
    }

    impl SolveObserver for Recording {
        fn on_simple_fill(&mut self, n_cells: usize) {
            self.filled += n_cells;
        }
        fn on_guess(&mut self, guess: Guess) {
            self.guesses.push(guess);
        }
    }

    let sudoku = Sudoku::from_str_line(HARD).unwrap();
    let mut grid = simplefill::Grid::from_sudoku(&sudoku).unwrap();
    let mut solver = Solver::with_observer(Recording {
        guesses: Vec::new(),
        filled: 0,
    });
    solver.solve(&mut grid).unwrap();
    let recording = solver.into_observer();

    assert!(grid.is_filled());
    assert!(!recording.guesses.is_empty());
    for guess in &recording.guesses {
        assert!(guess.depth >= 1);
        assert!(guess.n_empty_cells < 81);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    // masking out cells of a solved grid always leaves a solvable sudoku
    #[test]
    fn masked_solution_remains_solvable(mask in prop::collection::vec(any::<bool>(), 81)) {
        let mut bytes = [0u8; 81];
        for (i, (byte, &keep)) in bytes.iter_mut().zip(mask.iter()).enumerate() {
            if keep {
                *byte = SOLUTION.as_bytes()[i] - b'0';
            }
        }
        let sudoku = Sudoku::from_bytes(bytes).unwrap();
        let solution = sudoku.solve_one().unwrap();
        prop_assert!(solution.is_solved());
        for (given, solved) in sudoku.iter().zip(solution.iter()) {
            if given.is_some() {
                prop_assert_eq!(given, solved);
            }
        }
    }
}
