//! # DFS Solver (C6)
//!
//! LIFO stack-based depth-first search with a globally shared visited set (§4.6). Moves are
//! already produced by `Board::generate_moves` in `(vehicle_index ascending, direction
//! down<left<right<up, steps ascending)` order, which is the deterministic tie-break §4.6
//! requires, so no separate sort pass is needed here.
//!
//! The visited set is never cleared during the search, so this is not strictly depth-first in
//! the path-recovery sense — it is a tree search over a global DAG and may miss a shorter path
//! to an already-visited state reached via a different ancestor. This is the documented,
//! intentional behavior (§4.6, §9); BFS and A* exist for shortest-path purposes.

use crate::board::Board;
use crate::error::SolverError;
use crate::progress::SolverOptions;
use crate::search_strategies::Order;

use super::{common, SolveResult};

/// Runs depth-first search over `board`, pruning expansion beyond `options.max_depth` when
/// supplied (default unbounded).
pub fn solve(board: &Board, options: SolverOptions) -> Result<SolveResult, SolverError> {
    let max_depth = options.max_depth;
    common::run(board, Order::Lifo, max_depth, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Orientation, State, Vehicle};
    use crate::solver::SolveStatus;

    fn open_straight_line_board() -> Board {
        Board {
            rows: 1,
            cols: 5,
            exit: Cell::new(0, 4),
            vehicles: vec![Vehicle {
                orientation: Orientation::Horizontal,
                length: 2,
                is_goal: true,
                label: "carro objetivo".into(),
            }],
            goal_index: 0,
            initial_state: State::new(vec![Cell::new(0, 0)]),
        }
    }

    #[test]
    fn finds_a_solution_on_an_open_board() {
        let board = open_straight_line_board();
        let result = solve(&board, SolverOptions::none()).expect("valid board");
        assert_eq!(result.status, SolveStatus::Solved);
        assert!(board.goal_test(result.state_history.last().unwrap()));
    }

    #[test]
    fn max_depth_zero_prevents_any_expansion_beyond_the_root() {
        let board = open_straight_line_board();
        let options = SolverOptions {
            cancellation_token: None,
            progress_callback: None,
            max_depth: Some(0),
            ..Default::default()
        };
        let result = solve(&board, options).expect("valid board");
        assert_eq!(result.status, SolveStatus::Unsolved);
    }

    #[test]
    fn pre_asserted_cancellation_yields_aborted() {
        let board = open_straight_line_board();
        let token = crate::solver::CancellationToken::new();
        token.cancel();
        let options = SolverOptions {
            cancellation_token: Some(&token),
            progress_callback: None,
            max_depth: None,
            ..Default::default()
        };
        let result = solve(&board, options).expect("valid board");
        assert_eq!(result.status, SolveStatus::Aborted);
        assert_eq!(result.state_history.len(), 1);
    }
}
