//! # Solvers (C5–C8)
//!
//! Four interchangeable search strategies over the shared state kernel in [`crate::board`]:
//! breadth-first ([`bfs`]), depth-first with a visited set and optional depth bound ([`dfs`]),
//! backtracking ([`backtracking`], identical to DFS without a depth bound), and A* with a
//! domain heuristic ([`astar`]). Every entry point takes a `&Board` and [`SolverOptions`] and
//! returns a [`SolveResult`] (§6) — the common contract the original spec calls out as the
//! reason to extract a shared kernel in the first place (§9: "the source duplicates the state
//! kernel in each solver... each solver becomes a small control skeleton around the shared
//! kernel").

pub mod astar;
pub mod backtracking;
pub mod bfs;
pub mod dfs;

use crate::board::{Board, Move, State};
use crate::describe::describe_move;
use crate::error::SolverError;
use crate::progress::ProgressMetrics;

pub use crate::progress::{CancellationToken, SolverOptions, PROGRESS_INTERVAL};

/// Terminal classification of a solver invocation (§6). Transient conditions — cancellation,
/// frontier exhaustion — are statuses, not errors (§7); only a malformed board produces a
/// [`SolverError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveStatus {
    /// A path to the goal was found; `moves` and `state_history` describe it.
    Solved,
    /// The frontier was exhausted without reaching the goal.
    Unsolved,
    /// Cancellation was observed before or during the search.
    Aborted,
}

/// The uniform result object every solver entry point produces on termination (§6).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveResult {
    /// Terminal classification.
    pub status: SolveStatus,
    /// Ordered moves from the initial state to the goal; empty unless `status == Solved`.
    pub moves: Vec<Move>,
    /// States visited along the solution path, initial state first; length
    /// `moves.len() + 1` when solved, length 1 (just the initial state) otherwise.
    pub state_history: Vec<State>,
    /// One human-readable action string per move, in `moves` order.
    pub actions: Vec<String>,
    /// Final telemetry: explored count, residual frontier size, solution depth, elapsed time.
    pub metrics: ProgressMetrics,
    /// Vehicle labels, indexed as in `Board::vehicles`.
    pub vehicle_labels: Vec<String>,
}

impl SolveResult {
    /// Builds the `Aborted` result cancellation always yields (§4.4, §5, testable property 3):
    /// empty moves, a state history of length 1 containing only the initial state, depth 0.
    pub(crate) fn aborted(board: &Board, metrics: ProgressMetrics) -> Self {
        Self {
            status: SolveStatus::Aborted,
            moves: Vec::new(),
            state_history: vec![board.initial_state.clone()],
            actions: Vec::new(),
            metrics: ProgressMetrics {
                depth: 0,
                ..metrics
            },
            vehicle_labels: vehicle_labels(board),
        }
    }

    /// Builds the `Unsolved` result a solver yields once its frontier is exhausted.
    pub(crate) fn unsolved(board: &Board, metrics: ProgressMetrics) -> Self {
        Self {
            status: SolveStatus::Unsolved,
            moves: Vec::new(),
            state_history: vec![board.initial_state.clone()],
            actions: Vec::new(),
            metrics: ProgressMetrics { depth: 0, ..metrics },
            vehicle_labels: vehicle_labels(board),
        }
    }

    /// Builds the `Solved` result from a reconstructed move list, replaying each move from the
    /// initial state to populate `state_history` and `actions` (testable property 2).
    pub(crate) fn solved(board: &Board, moves: Vec<Move>, metrics: ProgressMetrics) -> Self {
        let mut state_history = Vec::with_capacity(moves.len() + 1);
        let mut current = board.initial_state.clone();
        state_history.push(current.clone());
        let mut actions = Vec::with_capacity(moves.len());
        for mv in &moves {
            actions.push(describe_move(board, mv));
            current = board.apply_move(&current, mv);
            state_history.push(current.clone());
        }
        Self {
            status: SolveStatus::Solved,
            metrics: ProgressMetrics {
                depth: moves.len(),
                ..metrics
            },
            moves,
            state_history,
            actions,
            vehicle_labels: vehicle_labels(board),
        }
    }
}

fn vehicle_labels(board: &Board) -> Vec<String> {
    board.vehicles.iter().map(|v| v.label.clone()).collect()
}

/// Runs `validate` and, if cancellation is already asserted, short-circuits to the `Aborted`
/// result without ever expanding a node (§5: "a cancellation asserted before the first
/// expansion yields the empty-history aborted result"). Shared by every solver entry point.
pub(crate) fn precheck(board: &Board, options: &SolverOptions) -> Result<Option<SolveResult>, SolverError> {
    board.validate()?;
    if options
        .cancellation_token
        .map(CancellationToken::is_cancelled)
        .unwrap_or(false)
    {
        return Ok(Some(SolveResult::aborted(board, ProgressMetrics::default())));
    }
    Ok(None)
}

/// Reconstructs the move list from a root state to `goal`, following `parent_of` backward then
/// reversing (§4.5). `parent_of` maps a state to the `(parent state, move that produced it)`
/// pair recorded when it was enqueued.
pub(crate) fn reconstruct_path(
    parent_of: &std::collections::HashMap<State, (State, Move)>,
    goal: &State,
) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut current = goal.clone();
    while let Some((parent, mv)) = parent_of.get(&current) {
        moves.push(*mv);
        current = parent.clone();
    }
    moves.reverse();
    moves
}
