use std::env;
use std::process;

use simplefill::{Grid, Guess, SolveObserver, Solver, Sudoku};

/// Prints solver progress to stdout as it happens.
struct Progress;

impl SolveObserver for Progress {
    fn on_simple_fill(&mut self, n_cells: usize) {
        println!("Simple fill solves {} slots.", n_cells);
    }

    fn on_guess(&mut self, guess: Guess) {
        println!(
            "Guess level[{}]: Trying {} at ({}, {}), {} empty slots left.",
            guess.depth,
            guess.digit,
            guess.cell.row(),
            guess.cell.col(),
            guess.n_empty_cells,
        );
    }
}

fn run() -> Result<bool, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return Err("expected a sudoku as argument, 81 cells with '.' for empty ones".to_string());
    }

    // allow the puzzle to be split across several arguments or lines
    let line: String = args
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .collect();
    let sudoku = Sudoku::from_str_line(&line).map_err(|err| err.to_string())?;

    println!("Your input puzzle is:");
    println!("{}", sudoku);
    println!();

    let mut grid = Grid::from_sudoku(&sudoku).map_err(|err| err.to_string())?;
    let verdict = Solver::with_observer(Progress).solve(&mut grid);

    // on failure the grid is left in its last propagated state and is
    // printed as such, never presented as a solution
    println!();
    match &verdict {
        Ok(()) => println!("Solver says: solved"),
        Err(err) => println!("Solver says: {}", err),
    }
    println!("Final state:");
    println!("{}", grid.to_sudoku());
    println!(
        "Checker says: {}",
        if grid.is_legal() {
            "the answer is legal"
        } else {
            "the answer is wrong"
        }
    );
    Ok(verdict.is_ok())
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(msg) => {
            eprintln!("error: {}", msg);
            process::exit(2);
        }
    }
}
