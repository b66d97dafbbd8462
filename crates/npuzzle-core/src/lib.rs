//! N-puzzle engine: immutable board representation, optimal A* solving with
//! twin-search solvability detection, and scramble generation.
//!
//! The crate is split into a leaf [`Board`] type (heuristics, neighbor and
//! twin generation) and a [`Solver`] that consumes it; data flows only from
//! board to solver. [`Scrambler`] produces solvable boards by walking legal
//! moves backward from the goal.

mod board;
mod error;
mod generator;
mod solver;

pub use board::Board;
pub use error::{BoardError, Result};
pub use generator::Scrambler;
pub use solver::Solver;

use serde::{Deserialize, Serialize};

/// A cell position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
