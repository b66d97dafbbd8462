//! Immutable puzzle board: heuristics, neighbor enumeration, twin generation.

use crate::{BoardError, Position, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One configuration of an n×n sliding puzzle.
///
/// Tiles are a permutation of `0..n²` in row-major order, with `0` as the
/// blank. Validation happens eagerly at construction, so every `Board` that
/// exists satisfies the permutation invariant and no later operation can
/// fail. All transitions (`neighbors`, `twin`) produce new, independent
/// boards; a board is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    n: usize,
    tiles: Vec<u32>,
}

impl Board {
    /// Create a board from rows of tiles.
    ///
    /// Rejects empty grids, ragged rows, out-of-range values, and duplicate
    /// values.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(BoardError::Empty);
        }
        let mut tiles = Vec::with_capacity(n * n);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != n {
                return Err(BoardError::RaggedRow {
                    row,
                    len: cells.len(),
                    expected: n,
                });
            }
            tiles.extend_from_slice(cells);
        }
        Self::from_flat(n, tiles)
    }

    /// The solved board of the given dimension: tiles `1..n²` in order, blank
    /// in the bottom-right corner.
    pub fn goal(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(BoardError::Empty);
        }
        let count = dimension * dimension;
        let mut tiles: Vec<u32> = (1..count as u32).collect();
        tiles.push(0);
        Ok(Self {
            n: dimension,
            tiles,
        })
    }

    fn from_flat(n: usize, tiles: Vec<u32>) -> Result<Self> {
        if tiles.len() != n * n {
            return Err(BoardError::TileCountMismatch {
                expected: n * n,
                found: tiles.len(),
            });
        }
        let max = (n * n - 1) as u32;
        let mut seen = vec![false; n * n];
        for &tile in &tiles {
            if tile > max {
                return Err(BoardError::TileOutOfRange { value: tile, max });
            }
            if seen[tile as usize] {
                return Err(BoardError::DuplicateTile { value: tile });
            }
            seen[tile as usize] = true;
        }
        Ok(Self { n, tiles })
    }

    /// Grid dimension n.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// The tile at `pos`, or `None` outside the grid. `0` is the blank.
    pub fn tile(&self, pos: Position) -> Option<u32> {
        if pos.row < self.n && pos.col < self.n {
            Some(self.tiles[self.index(pos)])
        } else {
            None
        }
    }

    /// Number of non-blank tiles out of place.
    pub fn hamming(&self) -> u32 {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(i, &tile)| tile != 0 && tile as usize != i + 1)
            .count() as u32
    }

    /// Sum of city-block distances of each non-blank tile from its goal cell.
    ///
    /// Admissible and consistent, which is what makes the A* search in the
    /// solver optimal.
    pub fn manhattan(&self) -> u32 {
        let mut total = 0;
        for (i, &tile) in self.tiles.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let home = (tile - 1) as usize;
            total += (i / self.n).abs_diff(home / self.n);
            total += (i % self.n).abs_diff(home % self.n);
        }
        total as u32
    }

    /// True iff every non-blank tile occupies its goal cell.
    pub fn is_goal(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(i, &tile)| tile == 0 || tile as usize == i + 1)
    }

    /// All boards reachable by sliding one adjacent tile into the blank.
    ///
    /// Yields 2, 3, or 4 boards depending on the blank's position, in the
    /// fixed order up, down, left, right.
    pub fn neighbors(&self) -> Vec<Board> {
        let blank = self.blank_position();
        let mut boards = Vec::with_capacity(4);
        if blank.row > 0 {
            boards.push(self.swapped(blank, Position::new(blank.row - 1, blank.col)));
        }
        if blank.row + 1 < self.n {
            boards.push(self.swapped(blank, Position::new(blank.row + 1, blank.col)));
        }
        if blank.col > 0 {
            boards.push(self.swapped(blank, Position::new(blank.row, blank.col - 1)));
        }
        if blank.col + 1 < self.n {
            boards.push(self.swapped(blank, Position::new(blank.row, blank.col + 1)));
        }
        boards
    }

    /// The board obtained by exchanging the first two non-blank tiles in
    /// row-major scan order.
    ///
    /// One transposition flips the permutation parity, so exactly one of a
    /// board and its twin is solvable; the solver races both to decide
    /// solvability. A 1×1 board has no tile pair to exchange and is returned
    /// unchanged.
    pub fn twin(&self) -> Board {
        let mut non_blank = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(i, _)| i);
        match (non_blank.next(), non_blank.next()) {
            (Some(a), Some(b)) => {
                let mut tiles = self.tiles.clone();
                tiles.swap(a, b);
                Board { n: self.n, tiles }
            }
            _ => self.clone(),
        }
    }

    fn blank_position(&self) -> Position {
        let idx = self
            .tiles
            .iter()
            .position(|&tile| tile == 0)
            .expect("a valid board always contains the blank");
        Position::new(idx / self.n, idx % self.n)
    }

    fn swapped(&self, a: Position, b: Position) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.index(a), self.index(b));
        Board { n: self.n, tiles }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.n + pos.col
    }
}

impl fmt::Display for Board {
    /// Textual grid form: a dimension line, then n rows of fixed-width tiles.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.n)?;
        let width = (self.tiles.len() - 1).to_string().len();
        for row in 0..self.n {
            for col in 0..self.n {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", self.tiles[row * self.n + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse the whitespace-delimited text form: dimension first, then n²
    /// tile values in row-major order.
    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();
        let n: usize = match tokens.next() {
            Some(token) => token
                .parse()
                .map_err(|_| BoardError::InvalidToken(token.to_string()))?,
            None => return Err(BoardError::Empty),
        };
        if n == 0 {
            return Err(BoardError::Empty);
        }
        let mut tiles = Vec::with_capacity(n * n);
        for token in tokens {
            tiles.push(
                token
                    .parse()
                    .map_err(|_| BoardError::InvalidToken(token.to_string()))?,
            );
        }
        Self::from_flat(n, tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: Vec<Vec<u32>>) -> Board {
        Board::new(rows).unwrap()
    }

    #[test]
    fn test_goal_board() {
        let goal = Board::goal(3).unwrap();
        assert_eq!(goal, board(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]]));
        assert!(goal.is_goal());
        assert_eq!(goal.hamming(), 0);
        assert_eq!(goal.manhattan(), 0);
    }

    #[test]
    fn test_heuristics_known_fixture() {
        // The standard 3x3 example: hamming 5, manhattan 10.
        let b = board(vec![vec![8, 1, 3], vec![4, 0, 2], vec![7, 6, 5]]);
        assert_eq!(b.hamming(), 5);
        assert_eq!(b.manhattan(), 10);
        assert!(!b.is_goal());
    }

    #[test]
    fn test_manhattan_zero_iff_goal() {
        let solved = board(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]]);
        assert!(solved.is_goal());
        assert_eq!(solved.manhattan(), 0);

        let one_off = board(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]);
        assert!(!one_off.is_goal());
        assert_eq!(one_off.manhattan(), 1);
    }

    #[test]
    fn test_neighbor_counts_by_blank_position() {
        // Corner blank: 2 neighbors.
        let corner = board(vec![vec![0, 1, 3], vec![4, 2, 5], vec![7, 8, 6]]);
        assert_eq!(corner.neighbors().len(), 2);

        // Edge blank: 3 neighbors.
        let edge = board(vec![vec![1, 0, 3], vec![4, 2, 5], vec![7, 8, 6]]);
        assert_eq!(edge.neighbors().len(), 3);

        // Center blank: 4 neighbors.
        let center = board(vec![vec![1, 2, 3], vec![4, 0, 5], vec![7, 8, 6]]);
        assert_eq!(center.neighbors().len(), 4);
    }

    #[test]
    fn test_neighbors_are_reversible() {
        let b = board(vec![vec![1, 2, 3], vec![4, 0, 5], vec![7, 8, 6]]);
        for neighbor in b.neighbors() {
            assert_ne!(neighbor, b);
            assert!(
                neighbor.neighbors().contains(&b),
                "source must be a neighbor of each of its neighbors"
            );
        }
    }

    #[test]
    fn test_neighbors_deterministic_order() {
        let b = board(vec![vec![1, 2, 3], vec![4, 0, 5], vec![7, 8, 6]]);
        assert_eq!(b.neighbors(), b.neighbors());
    }

    #[test]
    fn test_twin_swaps_first_two_non_blank() {
        let b = board(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]]);
        let twin = b.twin();
        assert_ne!(twin, b);
        assert_eq!(twin, board(vec![vec![2, 1, 3], vec![4, 5, 6], vec![7, 8, 0]]));
        // Deterministic: the same pair every time.
        assert_eq!(b.twin(), b.twin());
    }

    #[test]
    fn test_twin_skips_leading_blank() {
        let b = board(vec![vec![0, 2], vec![3, 1]]);
        assert_eq!(b.twin(), board(vec![vec![0, 3], vec![2, 1]]));
    }

    #[test]
    fn test_single_cell_board() {
        let b = board(vec![vec![0]]);
        assert!(b.is_goal());
        assert!(b.neighbors().is_empty());
        assert_eq!(b.twin(), b);
    }

    #[test]
    fn test_construction_rejects_invalid_grids() {
        assert_eq!(Board::new(vec![]), Err(BoardError::Empty));
        assert_eq!(
            Board::new(vec![vec![0, 1], vec![2]]),
            Err(BoardError::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            Board::new(vec![vec![0, 1], vec![2, 4]]),
            Err(BoardError::TileOutOfRange { value: 4, max: 3 })
        );
        assert_eq!(
            Board::new(vec![vec![0, 1], vec![1, 2]]),
            Err(BoardError::DuplicateTile { value: 1 })
        );
    }

    #[test]
    fn test_display_renders_grid_form() {
        let b = board(vec![vec![1, 0], vec![2, 3]]);
        assert_eq!(b.to_string(), "2\n1 0\n2 3\n");
    }

    #[test]
    fn test_display_pads_to_widest_tile() {
        let b = Board::goal(4).unwrap();
        let text = b.to_string();
        assert!(text.starts_with("4\n 1  2  3  4\n"));
        assert!(text.ends_with("13 14 15  0\n"));
    }

    #[test]
    fn test_parse_round_trip() {
        let b = board(vec![vec![8, 1, 3], vec![4, 0, 2], vec![7, 6, 5]]);
        let parsed: Board = b.to_string().parse().unwrap();
        assert_eq!(parsed, b);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!("".parse::<Board>(), Err(BoardError::Empty));
        assert_eq!("0".parse::<Board>(), Err(BoardError::Empty));
        assert_eq!(
            "2 1 0 2".parse::<Board>(),
            Err(BoardError::TileCountMismatch {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            "2 1 0 2 x".parse::<Board>(),
            Err(BoardError::InvalidToken("x".to_string()))
        );
    }

    #[test]
    fn test_equality_is_structural() {
        let a = board(vec![vec![1, 0], vec![2, 3]]);
        let b = board(vec![vec![1, 0], vec![2, 3]]);
        let c = board(vec![vec![1, 2], vec![0, 3]]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_tile_accessor() {
        let b = board(vec![vec![1, 0], vec![2, 3]]);
        assert_eq!(b.tile(Position::new(0, 1)), Some(0));
        assert_eq!(b.tile(Position::new(1, 1)), Some(3));
        assert_eq!(b.tile(Position::new(2, 0)), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let b = board(vec![vec![1, 0], vec![2, 3]]);
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
