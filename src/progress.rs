//! # Progress / Cancellation Harness
//!
//! Every solver maintains a monotonic expansion counter and samples it at a fixed interval
//! (§4.4), and polls an external cancellation flag at the top of every expansion (§5). Both
//! concerns are independent of which search algorithm is running, so they live here once and
//! are driven by each solver's loop rather than duplicated four times.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Number of expansions between progress-callback invocations (§4.4). Also logged at `debug`
/// level on the same cadence (§AS2) — logging is a separate, non-load-bearing channel.
pub const PROGRESS_INTERVAL: usize = 150;

/// A cooperative cancellation flag a caller can assert from outside the search. Cheap to clone
/// and share: internally an `Arc<AtomicBool>`, read with `Ordering::Relaxed` since it only ever
/// gates a polling check, never guards other shared state.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Creates a new, unasserted token.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Asserts cancellation; observed by the solver within O(1) expansions (§5).
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been asserted.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Telemetry reported incrementally (§4.4) and as the final `metrics` field of a
/// [`crate::solver::SolveResult`] (§6).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressMetrics {
    /// Final or running expansion count.
    pub explored: usize,
    /// Residual frontier size at the moment of sampling.
    pub frontier: usize,
    /// Solution depth on success; 0 otherwise.
    pub depth: usize,
    /// Elapsed wall-clock time in milliseconds, rounded.
    pub time_ms: u128,
}

/// Options shared by every solver entry point (§6): an optional cancellation token, an optional
/// progress callback, and `max_depth`, honored only by the DFS solver.
pub struct SolverOptions<'a> {
    /// Polled at the top of every expansion; `Some` cancellation terminates the search with
    /// `SolveStatus::Aborted`.
    pub cancellation_token: Option<&'a CancellationToken>,
    /// Invoked synchronously every `progress_interval` expansions and once more on
    /// termination, with the metrics at that instant.
    pub progress_callback: Option<&'a mut dyn FnMut(ProgressMetrics)>,
    /// Depth bound honored only by the DFS solver (§6); ignored by BFS, Backtracking, and A*.
    pub max_depth: Option<usize>,
    /// Overrides [`PROGRESS_INTERVAL`] when set (AS3: CLI `--progress-interval` experimentation
    /// knob). `None` uses the spec-mandated default of 150.
    pub progress_interval: Option<usize>,
}

impl Default for SolverOptions<'_> {
    fn default() -> Self {
        Self {
            cancellation_token: None,
            progress_callback: None,
            max_depth: None,
            progress_interval: None,
        }
    }
}

impl<'a> SolverOptions<'a> {
    /// An options value with no cancellation, no progress callback, and no depth bound.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Drives the sampling cadence and elapsed-time bookkeeping shared by every solver loop. Not a
/// public API surface by itself — each solver owns one and calls [`ProgressHarness::sample`]
/// right after every expansion.
pub(crate) struct ProgressHarness {
    start: Instant,
    explored: usize,
    interval: usize,
}

impl ProgressHarness {
    /// Starts a harness sampling every `interval` expansions (0 is treated as
    /// [`PROGRESS_INTERVAL`] to avoid a division by zero).
    pub(crate) fn with_interval(interval: usize) -> Self {
        Self {
            start: Instant::now(),
            explored: 0,
            interval: if interval == 0 {
                PROGRESS_INTERVAL
            } else {
                interval
            },
        }
    }

    /// Call once per expansion, after the node has been popped and goal-tested. Increments the
    /// explored counter and, every sampling interval, logs and invokes the progress callback
    /// with the current metrics.
    pub(crate) fn on_expansion(
        &mut self,
        frontier_len: usize,
        current_depth: usize,
        options: &mut SolverOptions,
    ) {
        self.explored += 1;
        if self.explored % self.interval == 0 {
            let metrics = ProgressMetrics {
                explored: self.explored,
                frontier: frontier_len,
                depth: current_depth,
                time_ms: self.elapsed_ms(),
            };
            tracing::debug!(
                explored = metrics.explored,
                frontier = metrics.frontier,
                time_ms = metrics.time_ms,
                "search progress"
            );
            if let Some(callback) = options.progress_callback.as_mut() {
                callback(metrics);
            }
        }
    }

    /// Call once on termination with the final status's depth, regardless of whether the last
    /// expansion landed on a `PROGRESS_INTERVAL` boundary (§4.4: "at every... interval, and
    /// when a final status is determined").
    pub(crate) fn finish(
        &self,
        frontier_len: usize,
        depth: usize,
        options: &mut SolverOptions,
    ) -> ProgressMetrics {
        let metrics = ProgressMetrics {
            explored: self.explored,
            frontier: frontier_len,
            depth,
            time_ms: self.elapsed_ms(),
        };
        tracing::info!(
            explored = metrics.explored,
            frontier = metrics.frontier,
            depth = metrics.depth,
            time_ms = metrics.time_ms,
            "search finished"
        );
        if let Some(callback) = options.progress_callback.as_mut() {
            callback(metrics);
        }
        metrics
    }

    /// A metrics snapshot with no side effects (no log emission, no callback invocation) for
    /// callers that need the current elapsed time without signaling a sampling or termination
    /// event — used by the mid-search cancellation path, which reports its own fixed `depth: 0`
    /// contract (§5) rather than the harness's own bookkeeping.
    pub(crate) fn snapshot(&self, frontier_len: usize, depth: usize) -> ProgressMetrics {
        ProgressMetrics {
            explored: self.explored,
            frontier: frontier_len,
            depth,
            time_ms: self.elapsed_ms(),
        }
    }

    fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_starts_unasserted() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn token_observes_assertion_after_cancel() {
        let token = CancellationToken::new();
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn cloned_token_shares_state() {
        let token = CancellationToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn harness_samples_every_progress_interval() {
        let mut harness = ProgressHarness::with_interval(PROGRESS_INTERVAL);
        let mut calls = 0;
        let mut options = SolverOptions {
            cancellation_token: None,
            progress_callback: Some(&mut |_m| calls += 1),
            max_depth: None,
            ..Default::default()
        };
        for _ in 0..PROGRESS_INTERVAL * 2 {
            harness.on_expansion(0, 0, &mut options);
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn harness_honors_a_custom_interval() {
        let mut harness = ProgressHarness::with_interval(10);
        let mut calls = 0;
        let mut options = SolverOptions {
            progress_callback: Some(&mut |_m| calls += 1),
            ..Default::default()
        };
        for _ in 0..25 {
            harness.on_expansion(0, 0, &mut options);
        }
        assert_eq!(calls, 2);
    }
}
