//! # Statistics Module
//!
//! Percentile-based statistics collection and `comfy-table` rendering for comparing the four
//! solver strategies (§2: BFS, DFS, Backtracking, A*) across a batch of puzzles. Grounded in the
//! teacher's `stats.rs`, which does the same thing for its two 8-puzzle strategies — the
//! percentile-table shape is kept, the fields are swapped for this crate's
//! [`crate::progress::ProgressMetrics`] (`explored`, `frontier`, `depth`, `time_ms`), since a
//! [`crate::solver::SolveResult`] does not expose the teacher's generated/enqueued/duplicate
//! counters (the shared state kernel in [`crate::board`] does not track them).
//!
//! This module is purely a rendering concern: it is not consulted by the search itself, and
//! the solver modules do not depend on it (AS5 — CLI-only concerns stay out of the core).

use std::fmt::{self, Display};

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table, modifiers, presets};

use crate::solver::{SolveStatus, SolveResult};

/// Statistics for a single solver invocation against one puzzle.
#[derive(Clone, Copy, Debug)]
pub struct Stats {
    /// How the search terminated.
    pub status: SolveStatus,
    /// Final expansion count.
    pub explored: usize,
    /// Residual frontier size at termination.
    pub frontier: usize,
    /// Solution depth (`moves.len()`); 0 unless `status == Solved`.
    pub depth: usize,
    /// Elapsed wall-clock time in milliseconds.
    pub duration_ms: u128,
}

impl From<&SolveResult> for Stats {
    fn from(result: &SolveResult) -> Self {
        Self {
            status: result.status,
            explored: result.metrics.explored,
            frontier: result.metrics.frontier,
            depth: result.metrics.depth,
            duration_ms: result.metrics.time_ms,
        }
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "status={:?}, explored={}, frontier={}, depth={}, time={}ms",
            self.status, self.explored, self.frontier, self.depth, self.duration_ms,
        )
    }
}

/// A numeric metric summarized by common percentiles.
#[derive(Clone, Copy, Debug, Default)]
pub struct Metric {
    pub p50: u64,
    pub p75: u64,
    pub p90: u64,
    pub p95: u64,
    pub p99: u64,
}

impl Metric {
    #[inline]
    fn new(p50: u64, p75: u64, p90: u64, p95: u64, p99: u64) -> Self {
        Self {
            p50,
            p75,
            p90,
            p95,
            p99,
        }
    }

    /// Builds a `Metric` from a slice and a projection function, using nearest-rank
    /// percentiles on the sorted values.
    #[inline]
    fn from_slice<T, F>(items: &[T], f: F) -> Self
    where
        F: Fn(&T) -> u64,
    {
        let n = items.len();
        if n == 0 {
            return Metric::default();
        }

        let mut vals: Vec<u64> = items.iter().map(f).collect();
        vals.sort_unstable();
        let idx = |p: u32| -> usize {
            let rank = (p as usize * n).div_ceil(100);
            rank.saturating_sub(1).min(n - 1)
        };
        Metric::new(
            vals[idx(50)],
            vals[idx(75)],
            vals[idx(90)],
            vals[idx(95)],
            vals[idx(99)],
        )
    }
}

/// Aggregated statistics summary for one strategy run over a batch of puzzles.
#[derive(Clone, Debug, Default)]
pub struct StatsSummary {
    /// Number of puzzle instances included in this summary.
    pub runs: usize,
    /// Number of runs that terminated `solved`.
    pub solved: usize,
    /// Final expansion count per run.
    pub explored: Metric,
    /// Residual frontier size per run.
    pub frontier: Metric,
    /// Solution depth per solved run.
    pub depth: Metric,
    /// Solve time per run, in milliseconds.
    pub duration_ms: Metric,
}

impl From<&[Stats]> for StatsSummary {
    fn from(value: &[Stats]) -> Self {
        let solved: Vec<&Stats> = value
            .iter()
            .filter(|s| s.status == SolveStatus::Solved)
            .collect();
        Self {
            runs: value.len(),
            solved: solved.len(),
            explored: Metric::from_slice(value, |s| s.explored as u64),
            frontier: Metric::from_slice(value, |s| s.frontier as u64),
            depth: Metric::from_slice(&solved, |s| s.depth as u64),
            duration_ms: Metric::from_slice(value, |s| {
                u64::try_from(s.duration_ms).unwrap_or(u64::MAX)
            }),
        }
    }
}

fn new_base_table() -> Table {
    let mut t = Table::new();
    t.load_preset(presets::UTF8_FULL_CONDENSED);
    t.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t
}

fn add_percentile_row(t: &mut Table, label: &str, m: &Metric) {
    t.add_row([
        Cell::new(label).add_attribute(Attribute::Bold),
        Cell::new(m.p50).set_alignment(CellAlignment::Right),
        Cell::new(m.p75).set_alignment(CellAlignment::Right),
        Cell::new(m.p90).set_alignment(CellAlignment::Right),
        Cell::new(m.p95).set_alignment(CellAlignment::Right),
        Cell::new(m.p99).set_alignment(CellAlignment::Right),
    ]);
}

fn add_value_row(t: &mut Table, metric: &str, value: &dyn Display) {
    t.add_row([
        Cell::new(metric).add_attribute(Attribute::Bold),
        Cell::new(format!("{value}")).set_alignment(CellAlignment::Right),
    ]);
}

fn print_percentile_section<'a>(
    title: &str,
    desc: &str,
    rows: impl IntoIterator<Item = (&'a str, &'a Metric)>,
) {
    println!("{title} – {desc}");

    let mut t = new_base_table();
    t.set_header([
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new("P50"),
        Cell::new("P75"),
        Cell::new("P90"),
        Cell::new("P95"),
        Cell::new("P99"),
    ]);

    for (label, metric) in rows {
        add_percentile_row(&mut t, label, metric);
    }

    println!("{t}\n");
}

/// One named strategy's aggregated summary, as compared side by side by
/// [`print_comparison_table`].
pub struct NamedSummary<'a> {
    pub label: &'a str,
    pub summary: &'a StatsSummary,
}

/// Prints a formatted comparison table across however many strategies are supplied (§2: up to
/// four — BFS, DFS, Backtracking, A*).
pub fn print_comparison_table(runs: usize, strategies: &[NamedSummary<'_>]) {
    println!("\nStrategy Comparison (runs: {runs})\n");

    for s in strategies {
        println!(
            "{}: {}/{} solved",
            s.label, s.summary.solved, s.summary.runs
        );
    }
    println!();

    let sections: [(&str, &str, fn(&StatsSummary) -> &Metric); 4] = [
        (
            "Time per run (ms)",
            "Wall-clock time to solve one instance (milliseconds).",
            |s| &s.duration_ms,
        ),
        (
            "Nodes explored",
            "States expanded (popped from the frontier and goal-tested).",
            |s| &s.explored,
        ),
        (
            "Residual frontier",
            "Frontier size remaining at termination (proxy for peak memory).",
            |s| &s.frontier,
        ),
        (
            "Solution depth (moves)",
            "Number of moves in the solution path found, over solved runs only.",
            |s| &s.depth,
        ),
    ];

    for (label, desc, accessor) in sections {
        let rows = strategies
            .iter()
            .map(|s| (s.label, accessor(s.summary)));
        print_percentile_section(label, desc, rows);
    }

    println!("Legend:");
    println!("- Columns are percentiles: P50 (median), P75, P90, P95, P99.");
}

/// Prints a formatted table for a single run's statistics, mirroring the labels used by
/// [`print_comparison_table`] so output feels consistent between `solve` and `benchmark`.
pub fn print_run_stats(stats: &Stats) {
    let mut table = new_base_table();
    table.set_header(["Metric", "Value"]);

    add_value_row(&mut table, "Status", &format!("{:?}", stats.status));
    add_value_row(&mut table, "Time (ms)", &stats.duration_ms);
    add_value_row(&mut table, "Nodes explored", &stats.explored);
    add_value_row(&mut table, "Residual frontier", &stats.frontier);
    add_value_row(&mut table, "Solution depth (moves)", &stats.depth);

    println!("\nRun statistics\n\n{table}");
}
