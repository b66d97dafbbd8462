//! Optimal A* solver with lockstep twin search for solvability detection.

use crate::Board;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

/// One step of a search path: a board, its move count from the start, the
/// cached A* priority (moves + manhattan), and a shared link to the node it
/// was expanded from. Parent chains form a tree grown backward from the
/// frontier; `Rc` keeps ancestors alive exactly as long as some queued node
/// or reconstructed path still needs them.
struct SearchNode {
    board: Board,
    moves: u32,
    priority: u32,
    parent: Option<Rc<SearchNode>>,
}

impl SearchNode {
    fn root(board: Board) -> Rc<Self> {
        let priority = board.manhattan();
        Rc::new(Self {
            board,
            moves: 0,
            priority,
            parent: None,
        })
    }

    fn child(board: Board, parent: &Rc<SearchNode>) -> Rc<Self> {
        let moves = parent.moves + 1;
        let priority = moves + board.manhattan();
        Rc::new(Self {
            board,
            moves,
            priority,
            parent: Some(Rc::clone(parent)),
        })
    }
}

/// Min-heap adapter for [`BinaryHeap`]: orders by ascending priority, and on
/// equal priority prefers the deeper node (closer to the goal).
struct MinPriority(Rc<SearchNode>);

impl PartialEq for MinPriority {
    fn eq(&self, other: &Self) -> bool {
        self.0.priority == other.0.priority && self.0.moves == other.0.moves
    }
}

impl Eq for MinPriority {}

impl PartialOrd for MinPriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinPriority {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.0.priority.cmp(&self.0.priority) {
            Ordering::Equal => self.0.moves.cmp(&other.0.moves),
            ord => ord,
        }
    }
}

/// A* solver over an initial [`Board`].
///
/// Construction runs the full search synchronously; the finished solver is
/// immutable. Two best-first searches advance in lockstep, one over the
/// initial board and one over its twin. A single transposition of two
/// non-blank tiles flips solvability, so exactly one of the pair can reach
/// the goal; whichever search gets there first decides the outcome without
/// any parity arithmetic.
///
/// The Rust type system discharges the original null-input precondition:
/// `new` takes the board by value, so there is nothing to check.
pub struct Solver {
    moves: i32,
    solution: Option<Vec<Board>>,
}

impl Solver {
    /// Solve `initial`, blocking until the search completes.
    pub fn new(initial: Board) -> Self {
        match Self::search(initial) {
            Some(goal) => {
                let mut path = Vec::with_capacity(goal.moves as usize + 1);
                let mut node = Some(&goal);
                while let Some(current) = node {
                    path.push(current.board.clone());
                    node = current.parent.as_ref();
                }
                path.reverse();
                Self {
                    moves: goal.moves as i32,
                    solution: Some(path),
                }
            }
            None => Self {
                moves: -1,
                solution: None,
            },
        }
    }

    /// Whether the initial board can reach the goal.
    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Minimal number of moves to the goal, or -1 if unsolvable.
    pub fn moves(&self) -> i32 {
        self.moves
    }

    /// The boards from initial to goal inclusive, or `None` if unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    /// Dual-queue lockstep loop: returns the goal node of the main search,
    /// or `None` once the twin search reaches its goal first.
    fn search(initial: Board) -> Option<Rc<SearchNode>> {
        let mut queue = BinaryHeap::new();
        let mut twin_queue = BinaryHeap::new();
        twin_queue.push(MinPriority(SearchNode::root(initial.twin())));
        queue.push(MinPriority(SearchNode::root(initial)));

        loop {
            // One of the two frontiers always reaches its goal, so neither
            // queue can empty out first; `?` is unreachable in practice.
            let MinPriority(min) = queue.pop()?;
            if min.board.is_goal() {
                return Some(min);
            }
            let MinPriority(twin_min) = twin_queue.pop()?;
            if twin_min.board.is_goal() {
                return None;
            }
            Self::expand(&min, &mut queue);
            Self::expand(&twin_min, &mut twin_queue);
        }
    }

    /// Push every neighbor of the popped node except the one that undoes its
    /// last move. Deliberately no full visited set: skipping only the
    /// immediate undo is enough for correctness with a consistent heuristic,
    /// and keeps expansion cheap.
    fn expand(node: &Rc<SearchNode>, queue: &mut BinaryHeap<MinPriority>) {
        for neighbor in node.board.neighbors() {
            let undoes_last = node
                .parent
                .as_ref()
                .is_some_and(|parent| parent.board == neighbor);
            if !undoes_last {
                queue.push(MinPriority(SearchNode::child(neighbor, node)));
            }
        }
    }
}
