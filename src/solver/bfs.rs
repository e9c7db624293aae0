//! # BFS Solver (C5)
//!
//! Standard FIFO breadth-first search (§4.5). Finds a solution of minimum number of moves
//! under the unit-cost edge model of §4.2 — each slide counts as one move regardless of
//! `steps`, so BFS minimizes slide count, not cell-distance (§9's documented move-cost
//! convention).

use crate::board::Board;
use crate::error::SolverError;
use crate::progress::SolverOptions;
use crate::search_strategies::Order;

use super::{common, SolveResult};

/// Runs breadth-first search over `board`. `options.max_depth` is ignored — BFS has no depth
/// bound.
pub fn solve(board: &Board, options: SolverOptions) -> Result<SolveResult, SolverError> {
    common::run(board, Order::Fifo, None, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Direction, Orientation, State, Vehicle};
    use crate::solver::SolveStatus;

    fn open_straight_line_board() -> Board {
        // 1x5 open row: goal vehicle length 2 at col 0, exit at col 4. The board itself
        // permits moves of 1, 2, or 3 steps in one edge (§4.2), so the shortest path is a
        // single 3-step slide — this exercises that BFS counts edges, not cells.
        Board {
            rows: 1,
            cols: 5,
            exit: Cell::new(0, 4),
            vehicles: vec![
                Vehicle {
                    orientation: Orientation::Horizontal,
                    length: 2,
                    is_goal: true,
                    label: "carro objetivo".into(),
                },
            ],
            goal_index: 0,
            initial_state: State::new(vec![Cell::new(0, 0)]),
        }
    }

    #[test]
    fn solves_open_straight_line_in_minimum_moves() {
        let board = open_straight_line_board();
        let result = solve(&board, SolverOptions::none()).expect("valid board");
        assert_eq!(result.status, SolveStatus::Solved);
        assert_eq!(result.moves.len(), 1);
        assert_eq!(result.moves[0].direction, Direction::Right);
        assert_eq!(result.moves[0].steps, 3);
        assert_eq!(result.state_history.len(), result.moves.len() + 1);
        assert!(board.goal_test(result.state_history.last().unwrap()));
    }

    #[test]
    fn already_solved_board_yields_empty_move_list() {
        let mut board = open_straight_line_board();
        board.exit = Cell::new(0, 1);
        let result = solve(&board, SolverOptions::none()).expect("valid board");
        assert_eq!(result.status, SolveStatus::Solved);
        assert!(result.moves.is_empty());
        assert_eq!(result.state_history, vec![board.initial_state.clone()]);
    }

    #[test]
    fn fully_packed_board_has_no_legal_move_and_is_unsolved() {
        // A 2x2 grid with every cell occupied: no vehicle has an empty adjacent cell to slide
        // into, so the goal (at (0,0), needing (1,1)) can never move at all.
        let board = Board {
            rows: 2,
            cols: 2,
            exit: Cell::new(1, 1),
            vehicles: vec![
                Vehicle {
                    orientation: Orientation::Single,
                    length: 1,
                    is_goal: true,
                    label: "carro objetivo".into(),
                },
                Vehicle {
                    orientation: Orientation::Single,
                    length: 1,
                    is_goal: false,
                    label: "1".into(),
                },
                Vehicle {
                    orientation: Orientation::Single,
                    length: 1,
                    is_goal: false,
                    label: "2".into(),
                },
                Vehicle {
                    orientation: Orientation::Single,
                    length: 1,
                    is_goal: false,
                    label: "3".into(),
                },
            ],
            goal_index: 0,
            initial_state: State::new(vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1),
            ]),
        };
        let result = solve(&board, SolverOptions::none()).expect("valid board");
        assert_eq!(result.status, SolveStatus::Unsolved);
        assert!(result.moves.is_empty());
        assert_eq!(result.metrics.depth, 0);
        assert_eq!(result.metrics.explored, 1);
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
        assert!(result.moves.is_empty());
        assert_eq!(result.state_history.len(), 1);
        assert_eq!(result.metrics.depth, 0);
    }

    #[test]
    fn every_action_string_is_non_empty() {
        let board = open_straight_line_board();
        let result = solve(&board, SolverOptions::none()).expect("valid board");
        assert_eq!(result.vehicle_labels.len(), board.vehicles.len());
        assert!(result.actions.iter().all(|a| !a.is_empty()));
    }

    #[test]
    fn running_twice_is_deterministic() {
        let board = open_straight_line_board();
        let first = solve(&board, SolverOptions::none()).expect("valid board");
        let second = solve(&board, SolverOptions::none()).expect("valid board");
        assert_eq!(first.moves, second.moves);
        assert_eq!(first.state_history, second.state_history);
        assert_eq!(first.actions, second.actions);
        assert_eq!(first.vehicle_labels, second.vehicle_labels);
    }
}
