//! Basic example of using the N-puzzle engine

use npuzzle_core::{Board, Scrambler, Solver};

fn main() {
    // Scramble a 3x3 board
    println!("Scrambling a 3x3 board...\n");
    let mut scrambler = Scrambler::new();
    let puzzle = scrambler.scramble(3, 20).expect("dimension is nonzero");

    println!("Scrambled board:");
    println!("{}", puzzle);
    println!("Hamming distance: {}", puzzle.hamming());
    println!("Manhattan distance: {}\n", puzzle.manhattan());

    // Solve it
    println!("Solving...\n");
    let solver = Solver::new(puzzle);
    println!("Minimum number of moves = {}", solver.moves());
    if let Some(path) = solver.solution() {
        for board in path {
            println!("{}", board);
        }
    }

    // Parse a puzzle from a string
    println!("--- Parsing a puzzle from string ---\n");
    let text = "3\n 8 1 3\n 4 0 2\n 7 6 5\n";
    match text.parse::<Board>() {
        Ok(board) => {
            println!("Parsed board:");
            println!("{}", board);
            let solver = Solver::new(board);
            if solver.is_solvable() {
                println!("Solvable in {} moves", solver.moves());
            } else {
                println!("No solution possible");
            }
        }
        Err(err) => println!("Parse error: {}", err),
    }
}
