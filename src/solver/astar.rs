//! # A* Solver (C8)
//!
//! Best-first search with a min-heap keyed on `f = g + h`, ties broken by smaller `h`
//! (preferring nodes closer to the goal), grounded in the generic `astar` implementation in the
//! retrieval pack's `pathfinding`-style example (`Rock-n-Donuts-routing-server`'s
//! `SmallestCostHolder`, reversed for a min-heap over `std::collections::BinaryHeap`). A
//! `best_cost` map from state to the lowest `g` seen discards stale heap entries and only
//! admits a successor when its tentative `g` strictly improves on the incumbent.
//!
//! The heuristic's `+2 × blockers` penalty (§4.6 — "Heuristic") is *not* admissible for this
//! problem's unit-cost move model and may return a suboptimal solution; the spec preserves this
//! behavior deliberately (§9). Callers that need a minimum-move solution should use
//! [`crate::solver::bfs`].

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::board::{Board, Orientation, State};
use crate::error::SolverError;
use crate::progress::{ProgressHarness, SolverOptions};

use super::{precheck, reconstruct_path, SolveResult};

struct HeapNode {
    f: i64,
    h: i64,
    g: usize,
    state: State,
}

impl PartialEq for HeapNode {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.h == other.h
    }
}
impl Eq for HeapNode {}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // `BinaryHeap` is a max-heap; reverse both comparisons so the smallest `f` (then
        // smallest `h`) is popped first.
        other.f.cmp(&self.f).then_with(|| other.h.cmp(&self.h))
    }
}

/// The A* heuristic (§4.6 "Heuristic"): 0 when the goal vehicle already covers the exit column
/// or row it is aligned on, Manhattan distance when misaligned or single-celled, and
/// `distance + 2 * blockers` along the goal vehicle's own axis otherwise.
pub(crate) fn heuristic(board: &Board, state: &State) -> i64 {
    let vehicle = board.goal_vehicle();
    let anchor = state.anchor(board.goal_index);
    let exit = board.exit;

    match vehicle.orientation {
        Orientation::Horizontal if anchor.row == exit.row => {
            let tail_col = anchor.col + vehicle.length as i32 - 1;
            if exit.col >= anchor.col && exit.col <= tail_col {
                0
            } else if exit.col > tail_col {
                let occupancy = board.occupancy(state);
                let distance = exit.col - tail_col;
                let blockers = count_row_blockers(board, &occupancy, anchor.row, tail_col + 1, exit.col);
                (distance + 2 * blockers) as i64
            } else {
                let occupancy = board.occupancy(state);
                let distance = anchor.col - exit.col;
                let blockers = count_row_blockers(board, &occupancy, anchor.row, exit.col, anchor.col - 1);
                (distance + 2 * blockers) as i64
            }
        }
        Orientation::Vertical if anchor.col == exit.col => {
            let tail_row = anchor.row + vehicle.length as i32 - 1;
            if exit.row >= anchor.row && exit.row <= tail_row {
                0
            } else if exit.row > tail_row {
                let occupancy = board.occupancy(state);
                let distance = exit.row - tail_row;
                let blockers = count_col_blockers(board, &occupancy, anchor.col, tail_row + 1, exit.row);
                (distance + 2 * blockers) as i64
            } else {
                let occupancy = board.occupancy(state);
                let distance = anchor.row - exit.row;
                let blockers = count_col_blockers(board, &occupancy, anchor.col, exit.row, anchor.row - 1);
                (distance + 2 * blockers) as i64
            }
        }
        _ => ((exit.row - anchor.row).abs() + (exit.col - anchor.col).abs()) as i64,
    }
}

/// Number of occupied cells in `row`, columns `[from, to]` inclusive (`from <= to` assumed).
fn count_row_blockers(board: &Board, occupancy: &[i32], row: i32, from: i32, to: i32) -> i32 {
    let mut count = 0;
    for col in from..=to {
        if row >= 0
            && row < board.rows as i32
            && col >= 0
            && col < board.cols as i32
            && occupancy[row as usize * board.cols + col as usize] != -1
        {
            count += 1;
        }
    }
    count
}

/// Number of occupied cells in `col`, rows `[from, to]` inclusive (`from <= to` assumed).
fn count_col_blockers(board: &Board, occupancy: &[i32], col: i32, from: i32, to: i32) -> i32 {
    let mut count = 0;
    for row in from..=to {
        if row >= 0
            && row < board.rows as i32
            && col >= 0
            && col < board.cols as i32
            && occupancy[row as usize * board.cols + col as usize] != -1
        {
            count += 1;
        }
    }
    count
}

/// Runs A* search over `board`. `options.max_depth` is ignored — only DFS honors it.
pub fn solve(board: &Board, mut options: SolverOptions) -> Result<SolveResult, SolverError> {
    if let Some(early) = precheck(board, &options)? {
        return Ok(early);
    }

    let start = board.initial_state.clone();
    let h0 = heuristic(board, &start);

    let mut heap = BinaryHeap::new();
    let mut best_cost: HashMap<State, usize> = HashMap::new();
    let mut parent_of: HashMap<State, (State, crate::board::Move)> = HashMap::new();

    best_cost.insert(start.clone(), 0);
    heap.push(HeapNode {
        f: h0,
        h: h0,
        g: 0,
        state: start,
    });

    let mut harness = ProgressHarness::with_interval(
        options
            .progress_interval
            .unwrap_or(crate::progress::PROGRESS_INTERVAL),
    );

    while let Some(node) = heap.pop() {
        if options
            .cancellation_token
            .map(crate::progress::CancellationToken::is_cancelled)
            .unwrap_or(false)
        {
            return Ok(SolveResult::aborted(board, harness.snapshot(heap.len(), 0)));
        }

        if node.g > *best_cost.get(&node.state).unwrap_or(&usize::MAX) {
            // Stale heap entry superseded by a better path found after it was pushed.
            continue;
        }

        harness.on_expansion(heap.len(), node.g, &mut options);

        if board.goal_test(&node.state) {
            let moves = reconstruct_path(&parent_of, &node.state);
            let metrics = harness.finish(heap.len(), moves.len(), &mut options);
            return Ok(SolveResult::solved(board, moves, metrics));
        }

        for mv in board.generate_moves(&node.state) {
            let next = board.apply_move(&node.state, &mv);
            let tentative_g = node.g + 1;
            let incumbent = *best_cost.get(&next).unwrap_or(&usize::MAX);
            if tentative_g < incumbent {
                best_cost.insert(next.clone(), tentative_g);
                parent_of.insert(next.clone(), (node.state.clone(), mv));
                let h = heuristic(board, &next);
                heap.push(HeapNode {
                    f: tentative_g as i64 + h,
                    h,
                    g: tentative_g,
                    state: next,
                });
            }
        }
    }

    let metrics = harness.finish(heap.len(), 0, &mut options);
    Ok(SolveResult::unsolved(board, metrics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Direction, Orientation, State, Vehicle};
    use crate::solver::SolveStatus;

    fn left_exit_board() -> Board {
        Board {
            rows: 1,
            cols: 4,
            exit: Cell::new(0, 0),
            vehicles: vec![Vehicle {
                orientation: Orientation::Horizontal,
                length: 2,
                is_goal: true,
                label: "carro objetivo".into(),
            }],
            goal_index: 0,
            initial_state: State::new(vec![Cell::new(0, 1)]),
        }
    }

    #[test]
    fn heuristic_is_zero_when_goal_already_covers_exit() {
        let board = left_exit_board();
        let mut state = board.initial_state.clone();
        state = board.apply_move(
            &state,
            &crate::board::Move {
                vehicle_index: 0,
                direction: Direction::Left,
                steps: 1,
            },
        );
        assert_eq!(heuristic(&board, &state), 0);
    }

    #[test]
    fn heuristic_counts_blockers_with_weight_two() {
        // Goal vehicle horizontal, length 1, at col 0, aligned with the exit row; a single
        // blocker at col 2, exit at col 3. Distance from tail (col 0) to exit (col 3) is 3,
        // plus one blocker at col 2 weighted by 2. A `Single`-orientation goal would instead
        // take the Manhattan-distance arm (§4.6), so this must be `Horizontal` to exercise the
        // blocker-counting branch at all.
        let board = Board {
            rows: 1,
            cols: 4,
            exit: Cell::new(0, 3),
            vehicles: vec![
                Vehicle {
                    orientation: Orientation::Horizontal,
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
            ],
            goal_index: 0,
            initial_state: State::new(vec![Cell::new(0, 0), Cell::new(0, 2)]),
        };
        assert_eq!(heuristic(&board, &board.initial_state), 3 + 2);
    }

    #[test]
    fn heuristic_is_manhattan_distance_when_misaligned() {
        let board = Board {
            rows: 3,
            cols: 3,
            exit: Cell::new(2, 2),
            vehicles: vec![Vehicle {
                orientation: Orientation::Horizontal,
                length: 1,
                is_goal: true,
                label: "carro objetivo".into(),
            }],
            goal_index: 0,
            initial_state: State::new(vec![Cell::new(0, 0)]),
        };
        assert_eq!(heuristic(&board, &board.initial_state), 4);
    }

    #[test]
    fn finds_a_solution_though_not_necessarily_shortest() {
        let board = left_exit_board();
        let result = solve(&board, SolverOptions::none()).expect("valid board");
        assert_eq!(result.status, SolveStatus::Solved);
        assert_eq!(result.moves.len(), 1);
        assert_eq!(result.moves[0].direction, Direction::Left);
    }

    #[test]
    fn pre_asserted_cancellation_yields_aborted() {
        let board = left_exit_board();
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
