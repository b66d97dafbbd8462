// End-to-end exercises of the public crate surface.

use npuzzle_core::{Board, Scrambler, Solver};

mod parse_and_solve {
    use super::*;

    const PUZZLE_3X3: &str = "3\n 0  1  3\n 4  2  5\n 7  8  6\n";

    #[test]
    fn text_form_solves_to_known_optimum() {
        let board: Board = PUZZLE_3X3.parse().unwrap();
        let solver = Solver::new(board.clone());

        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), 4);

        let path = solver.solution().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], board);
        assert!(path[4].is_goal());
    }

    #[test]
    fn unsolvable_text_form_reports_no_solution() {
        let board: Board = "2\n1 0\n2 3\n".parse().unwrap();
        let twin = board.twin();
        let solver = Solver::new(board);
        let twin_solver = Solver::new(twin);

        // Exactly one of the pair solves.
        assert_ne!(solver.is_solvable(), twin_solver.is_solvable());
        let unsolvable = if solver.is_solvable() { twin_solver } else { solver };
        assert_eq!(unsolvable.moves(), -1);
        assert!(unsolvable.solution().is_none());
    }

    #[test]
    fn display_output_parses_back_along_the_path() {
        let board: Board = PUZZLE_3X3.parse().unwrap();
        let solver = Solver::new(board);
        for step in solver.solution().unwrap() {
            let reparsed: Board = step.to_string().parse().unwrap();
            assert_eq!(&reparsed, step);
        }
    }
}

mod scramble_and_solve {
    use super::*;

    #[test]
    fn seeded_scrambles_solve_within_budget() {
        for seed in [1, 2, 3] {
            let board = Scrambler::with_seed(seed).scramble(3, 15).unwrap();
            let solver = Solver::new(board);
            assert!(solver.is_solvable());
            assert!(solver.moves() <= 15);
        }
    }
}

mod serialization {
    use super::*;

    #[test]
    fn solution_path_survives_json() {
        let board: Board = "3\n1 2 3\n4 5 6\n7 0 8\n".parse().unwrap();
        let solver = Solver::new(board);
        let path = solver.solution().unwrap();

        let json = serde_json::to_string(&path).unwrap();
        let back: Vec<Board> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
