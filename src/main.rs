//! # Rush-Hour Solver Kernel — CLI
//!
//! A thin consumer of the `rush_kernel` library (AS5): it reads puzzle files from disk, hands
//! their text to the parser, runs one or all four solver strategies, and renders the result.
//! None of the progress-bar, coloring, or table-rendering concerns here leak into the library —
//! the CLI's own `main.rs` mirrors the relationship the teacher's `main.rs` has to its
//! `board`/`solver` modules.
//!
//! Two subcommands, mirroring the teacher's `Benchmark`/`SolveRandom` split:
//!
//! - `solve`: parse one puzzle file, run one chosen algorithm, print the move list, action
//!   strings, and a `comfy-table` stats table.
//! - `benchmark`: parse every puzzle file in a directory and run all four algorithms over each
//!   (via `rayon`), printing a `comfy-table` percentile comparison.
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator};
use rayon::ThreadPoolBuilder;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use rush_kernel::board::Board;
use rush_kernel::error::SolverError;
use rush_kernel::parser;
use rush_kernel::progress::{ProgressMetrics, SolverOptions};
use rush_kernel::solver::{SolveResult, SolveStatus, astar, backtracking, bfs, dfs};
use rush_kernel::stats::{self, NamedSummary, Stats, StatsSummary};

/// Which of the four interchangeable search strategies (§2) to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Backtracking,
    AStar,
}

/// All four strategies, in the spec's own C5–C8 order.
const ALL_ALGORITHMS: [Algorithm; 4] = [
    Algorithm::Bfs,
    Algorithm::Dfs,
    Algorithm::Backtracking,
    Algorithm::AStar,
];

impl Algorithm {
    fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Backtracking => "Backtracking",
            Algorithm::AStar => "A*",
        }
    }

    /// Dispatches to the chosen solver entry point. `options.max_depth` is honored only by DFS
    /// (§6) — the others ignore it, as their own entry points document.
    fn solve(self, board: &Board, options: SolverOptions) -> Result<SolveResult, SolverError> {
        match self {
            Algorithm::Bfs => bfs::solve(board, options),
            Algorithm::Dfs => dfs::solve(board, options),
            Algorithm::Backtracking => backtracking::solve(board, options),
            Algorithm::AStar => astar::solve(board, options),
        }
    }
}

/// Command-line arguments for the Rush-Hour solver kernel.
#[derive(Parser)]
#[command(about = "Solver kernel for sliding-vehicle (Rush Hour family) board puzzles")]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Subcommands supported by the CLI.
#[derive(Subcommand)]
enum Commands {
    /// Parse one puzzle file and solve it with a single chosen algorithm.
    Solve {
        /// Path to a puzzle text file (board rows followed by `Salida: <row>,<col>`).
        path: PathBuf,
        /// Which search strategy to run.
        #[arg(short, long, value_enum, default_value_t = Algorithm::Bfs)]
        algorithm: Algorithm,
        /// Depth bound honored only by `--algorithm dfs` (§6).
        #[arg(long)]
        max_depth: Option<usize>,
        /// Overrides the spec's `PROGRESS_INTERVAL` (§4.4) for experimentation.
        #[arg(long)]
        progress_interval: Option<usize>,
    },
    /// Parse every puzzle file in a directory and compare all four algorithms.
    Benchmark {
        /// Directory containing puzzle text files.
        dir: PathBuf,
        /// Number of worker threads to use (defaults to Rayon automatic).
        #[arg(short, long)]
        threads: Option<usize>,
    },
}

/// Installs a `tracing_subscriber::fmt` subscriber reading `RUST_LOG`, matching AS2.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let Args { command } = Args::parse();

    match command {
        Commands::Solve {
            path,
            algorithm,
            max_depth,
            progress_interval,
        } => solve_one(&path, algorithm, max_depth, progress_interval),
        Commands::Benchmark { dir, threads } => benchmark(&dir, threads),
    }
}

/// Reads and parses one puzzle file (§4.1), wrapping the parse error with the offending path.
fn read_puzzle(path: &Path) -> Result<Board> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading puzzle file {}", path.display()))?;
    parser::parse(&text).with_context(|| format!("parsing puzzle file {}", path.display()))
}

/// Runs `solve`: one puzzle, one algorithm, with a live spinner driven by the solver's own
/// progress callback (§4.4) and a final stats table.
fn solve_one(
    path: &Path,
    algorithm: Algorithm,
    max_depth: Option<usize>,
    progress_interval: Option<usize>,
) -> Result<()> {
    let board = read_puzzle(path)?;

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut on_progress = |metrics: ProgressMetrics| {
        spinner.set_message(format!(
            "explored={} frontier={} depth={}",
            metrics.explored, metrics.frontier, metrics.depth
        ));
    };
    let options = SolverOptions {
        max_depth,
        progress_interval,
        progress_callback: Some(&mut on_progress),
        ..SolverOptions::default()
    };

    let result = algorithm.solve(&board, options)?;
    spinner.finish_and_clear();

    print_result(algorithm, &result);
    stats::print_run_stats(&Stats::from(&result));
    Ok(())
}

/// Prints the status line and the human-readable action list (§4.3, §6).
fn print_result(algorithm: Algorithm, result: &SolveResult) {
    let status_text = match result.status {
        SolveStatus::Solved => "solved".green().bold(),
        SolveStatus::Unsolved => "unsolved".red().bold(),
        SolveStatus::Aborted => "aborted".yellow().bold(),
    };
    println!(
        "\n{} via {}: {}",
        "Result".bold(),
        algorithm.label(),
        status_text
    );

    if result.actions.is_empty() {
        println!("(no moves)");
        return;
    }
    for (idx, action) in result.actions.iter().enumerate() {
        println!("{:>3}. {action}", idx + 1);
    }
}

/// Runs one algorithm over every board in parallel (§5: independent boards share no mutable
/// state), collecting per-board [`Stats`]. A board that fails the solver's own structural
/// validation (§7, a programming-bug signal that should not occur for a parser-produced board)
/// is skipped rather than aborting the whole batch.
fn run_algorithm_over_boards(boards: &[Board], algorithm: Algorithm) -> Vec<Stats> {
    boards
        .par_iter()
        .progress()
        .filter_map(|board| {
            algorithm
                .solve(board, SolverOptions::none())
                .ok()
                .map(|result| Stats::from(&result))
        })
        .collect()
}

/// Runs `benchmark`: every puzzle file in a directory, every algorithm, printed as one
/// percentile comparison table — the shape of the teacher's `print_comparison_table`.
fn benchmark(dir: &Path, threads: Option<usize>) -> Result<()> {
    if let Some(t) = threads {
        ThreadPoolBuilder::new()
            .num_threads(t)
            .build_global()
            .context("failed to build thread pool")?;
        println!("Using {t} threads for parallel execution.");
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("reading directory {}", dir.display()))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    if paths.is_empty() {
        anyhow::bail!("no puzzle files found in {}", dir.display());
    }

    println!("Parsing {} puzzle file(s)...", paths.len());
    let boards: Vec<Board> = paths
        .iter()
        .progress()
        .filter_map(|path| match read_puzzle(path) {
            Ok(board) => Some(board),
            Err(err) => {
                eprintln!("skipping {}: {err:#}", path.display());
                None
            }
        })
        .collect();

    if boards.is_empty() {
        anyhow::bail!("no puzzle in {} parsed successfully", dir.display());
    }

    let mut summaries: Vec<StatsSummary> = Vec::with_capacity(ALL_ALGORITHMS.len());
    for algorithm in ALL_ALGORITHMS {
        println!("Running {}...", algorithm.label());
        let stats = run_algorithm_over_boards(&boards, algorithm);
        summaries.push(stats.as_slice().into());
    }

    let named: Vec<NamedSummary<'_>> = ALL_ALGORITHMS
        .iter()
        .zip(summaries.iter())
        .map(|(algorithm, summary)| NamedSummary {
            label: algorithm.label(),
            summary,
        })
        .collect();

    stats::print_comparison_table(boards.len(), &named);
    Ok(())
}
