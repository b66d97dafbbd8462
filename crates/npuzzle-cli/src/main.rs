//! Command-line frontend: reads a puzzle in its text form, drives the core
//! solver, and prints the solution path (or a JSON report).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use npuzzle_core::{Board, Scrambler, Solver};
use serde::Serialize;
use std::fs;
use std::io::Read;

#[derive(Parser)]
#[command(name = "npuzzle", version, about = "Optimal N-puzzle solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle read from a file, or from stdin with "-"
    ///
    /// Input format: the dimension n, then n*n whitespace-delimited tiles in
    /// row-major order, 0 denoting the blank.
    Solve {
        /// Puzzle file path, or "-" for stdin
        file: String,
        /// Emit a JSON report instead of the text output
        #[arg(long)]
        json: bool,
    },
    /// Print a random solvable puzzle in the input format
    Scramble {
        /// Board dimension n
        #[arg(short = 'n', long, default_value_t = 4)]
        dimension: usize,
        /// Number of random moves away from the goal
        #[arg(long, default_value_t = 40)]
        steps: usize,
        /// Seed for reproducible scrambles
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Machine-readable result of a solve run.
#[derive(Serialize)]
struct SolveReport {
    solvable: bool,
    moves: i32,
    solution: Option<Vec<Board>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve { file, json } => solve(&file, json),
        Command::Scramble {
            dimension,
            steps,
            seed,
        } => scramble(dimension, steps, seed),
    }
}

fn solve(file: &str, json: bool) -> Result<()> {
    let text = read_input(file)?;
    let board: Board = text
        .parse()
        .with_context(|| format!("parsing puzzle from {file}"))?;
    let solver = Solver::new(board);

    if json {
        let report = SolveReport {
            solvable: solver.is_solvable(),
            moves: solver.moves(),
            solution: solver.solution().map(<[Board]>::to_vec),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(path) = solver.solution() {
        println!("Minimum number of moves = {}", solver.moves());
        for board in path {
            println!("{board}");
        }
    } else {
        println!("No solution possible");
    }
    Ok(())
}

fn scramble(dimension: usize, steps: usize, seed: Option<u64>) -> Result<()> {
    let mut scrambler = seed.map_or_else(Scrambler::new, Scrambler::with_seed);
    let board = scrambler
        .scramble(dimension, steps)
        .context("generating scramble")?;
    // The display form doubles as the solve input format.
    println!("{board}");
    Ok(())
}

fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading puzzle from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(file).with_context(|| format!("reading {file}"))
    }
}
