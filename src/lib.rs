//! # Rush-Hour Solver Kernel
//!
//! A solver kernel for sliding-vehicle board puzzles of the Rush Hour family: a textual
//! puzzle parser ([`parser`]), the shared state kernel that defines the implicit state graph
//! ([`board`]), a move describer ([`describe`]), a progress/cancellation harness ([`progress`]),
//! and four interchangeable graph search strategies ([`solver`]) sharing one contract.
//!
//! This crate is the core search engine only. The CLI in `main.rs`, and the statistics
//! rendering in [`stats`], are thin consumers built on top of it — neither is part of the
//! specified core, and the core never depends on them.

pub mod board;
pub mod describe;
pub mod error;
pub mod parser;
pub mod progress;
pub mod search_strategies;
pub mod solver;
pub mod stats;
