//! Shared FIFO/LIFO search loop used by BFS (§4.5), DFS (§4.6), and Backtracking (§4.6,
//! identical to DFS without a depth bound). The three differ only in frontier order and
//! whether a depth bound prunes expansion — everything else (visited-set membership, parent
//! reconstruction, progress sampling, cancellation) is one loop.

use std::collections::{HashMap, HashSet};

use crate::board::{Board, Move, State};
use crate::progress::{ProgressHarness, SolverOptions};
use crate::search_strategies::{FifoLifoFrontier, Frontier, Order};

use super::{precheck, reconstruct_path, SolveResult};

/// Runs the shared frontier search. `order` selects BFS or DFS/Backtracking behavior;
/// `max_depth` prunes expansion at that depth (honored only by the caller that wants it — BFS
/// and Backtracking always pass `None`).
pub(super) fn run(
    board: &Board,
    order: Order,
    max_depth: Option<usize>,
    mut options: SolverOptions,
) -> Result<SolveResult, crate::error::SolverError> {
    if let Some(early) = precheck(board, &options)? {
        return Ok(early);
    }

    let mut frontier: FifoLifoFrontier<State> = match order {
        Order::Fifo => FifoLifoFrontier::fifo(),
        Order::Lifo => FifoLifoFrontier::lifo(),
    };
    let mut visited: HashSet<State> = HashSet::new();
    let mut depth_of: HashMap<State, usize> = HashMap::new();
    let mut parent_of: HashMap<State, (State, Move)> = HashMap::new();

    let start = board.initial_state.clone();
    visited.insert(start.clone());
    depth_of.insert(start.clone(), 0);
    frontier.push(start);

    let mut harness = ProgressHarness::with_interval(
        options
            .progress_interval
            .unwrap_or(crate::progress::PROGRESS_INTERVAL),
    );

    while let Some(state) = frontier.pop() {
        if options
            .cancellation_token
            .map(crate::progress::CancellationToken::is_cancelled)
            .unwrap_or(false)
        {
            return Ok(SolveResult::aborted(board, harness.snapshot(frontier.len(), 0)));
        }

        let depth = *depth_of.get(&state).unwrap_or(&0);
        harness.on_expansion(frontier.len(), depth, &mut options);

        if board.goal_test(&state) {
            let moves = reconstruct_path(&parent_of, &state);
            let metrics = harness.finish(frontier.len(), moves.len(), &mut options);
            return Ok(SolveResult::solved(board, moves, metrics));
        }

        if max_depth.map(|bound| depth >= bound).unwrap_or(false) {
            continue;
        }

        for mv in board.generate_moves(&state) {
            let next = board.apply_move(&state, &mv);
            if visited.contains(&next) {
                continue;
            }
            visited.insert(next.clone());
            depth_of.insert(next.clone(), depth + 1);
            parent_of.insert(next.clone(), (state.clone(), mv));
            frontier.push(next);
        }
    }

    let metrics = harness.finish(frontier.len(), 0, &mut options);
    Ok(SolveResult::unsolved(board, metrics))
}
