//! Scramble generation: solvable boards by walking legal moves from the goal.

use crate::{Board, Result};

/// Produces random solvable boards.
///
/// Scrambling walks a random sequence of legal blank moves backward from the
/// goal board, so every result is reachable from the goal by construction
/// and solvable in at most `steps` moves. No parity bookkeeping is needed.
pub struct Scrambler {
    rng: SimpleRng,
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrambler {
    /// Create a scrambler seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Create a scrambler with a fixed seed for reproducible boards.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Scramble the goal board of the given dimension with `steps` random
    /// moves, never immediately undoing the previous move.
    pub fn scramble(&mut self, dimension: usize, steps: usize) -> Result<Board> {
        let mut board = Board::goal(dimension)?;
        let mut previous: Option<Board> = None;
        for _ in 0..steps {
            let mut candidates: Vec<Board> = board
                .neighbors()
                .into_iter()
                .filter(|neighbor| previous.as_ref() != Some(neighbor))
                .collect();
            if candidates.is_empty() {
                // 1x1 board: nothing can move.
                break;
            }
            let next = candidates.swap_remove(self.rng.next_usize(candidates.len()));
            previous = Some(std::mem::replace(&mut board, next));
        }
        Ok(board)
    }
}

/// Simple PCG-style PRNG, seeded through `getrandom` so the crate stays
/// usable from WASM without pulling in a full RNG stack.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: a static counter if the OS entropy source fails.
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}
