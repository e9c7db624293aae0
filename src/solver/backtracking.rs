//! # Backtracking Solver (C7)
//!
//! Identical in effect to [`crate::solver::dfs`] without a depth bound (§4.6); kept as a
//! separately named entry point purely for API symmetry with BFS, DFS, and A*, as the original
//! spec calls for. `options.max_depth` is ignored here — callers who want a bounded search use
//! the DFS entry point directly.

use crate::board::Board;
use crate::error::SolverError;
use crate::progress::SolverOptions;
use crate::search_strategies::Order;

use super::{common, SolveResult};

/// Runs recursive-in-effect backtracking search over `board` (implemented, like DFS, as an
/// explicit stack rather than call-stack recursion — see §9's design notes on avoiding
/// accidental drift between the duplicated state kernels of the original four solvers).
pub fn solve(board: &Board, mut options: SolverOptions) -> Result<SolveResult, SolverError> {
    options.max_depth = None;
    common::run(board, Order::Lifo, None, options)
}
