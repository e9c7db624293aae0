//! Error kinds for the puzzle parser and solver entry points.
//!
//! Parser errors (§7: `EmptyPuzzle`, `MissingExit`, `MalformedExit`, `EmptyBoard`, plus
//! `MissingGoalVehicle` for §4.1's "grid with no `B` vehicle" failure and two structural
//! extensions, `InconsistentColumns`/`UnknownToken`, for malformed board rows) are unrecoverable
//! — callers must discard the parse result. `InvalidBoardData` is a separate, solver-side enum:
//! a defensive, last-resort check every solver entry point runs on a hand-constructed `Board`
//! that bypassed the parser (see `Board::validate`). Either way a structural failure signals a
//! bug, not a search outcome — a solver never reports `unsolved` for a malformed board.

use thiserror::Error;

/// Failures raised while turning puzzle text into a [`crate::board::Board`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is blank after line-ending normalization and whitespace trimming.
    #[error("puzzle text is empty")]
    EmptyPuzzle,

    /// No line matching `Salida\s*:` (case-insensitive) was found.
    #[error("no Salida line found")]
    MissingExit,

    /// A `Salida` line was found but its coordinates are not two integers.
    #[error("malformed Salida coordinates: {raw:?}")]
    MalformedExit {
        /// The raw text that failed to parse as `<row>,<col>`.
        raw: String,
    },

    /// The `Salida` line is present but no board rows precede it.
    #[error("board portion is empty")]
    EmptyBoard,

    /// Board rows tokenized to differing column counts.
    #[error("row {row} has {found} columns, expected {expected}")]
    InconsistentColumns {
        /// Zero-based row index of the offending row.
        row: usize,
        /// Column count established by the first board row.
        expected: usize,
        /// Column count found on `row`.
        found: usize,
    },

    /// A board token is not one of the seven recognized symbols.
    #[error("unrecognized board token {token:?} at row {row}, col {col}")]
    UnknownToken {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending token text.
        token: String,
    },

    /// The board has no cell bearing the `B` (goal vehicle) token.
    #[error("no goal vehicle (B) found on the board")]
    MissingGoalVehicle,
}

/// Structural errors raised by a solver entry point when handed a [`crate::board::Board`] that
/// is not well-formed. These indicate a programming bug upstream (normally the parser already
/// guarantees well-formedness), never a search outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The board's vehicle list is empty or its recorded goal index is out of range.
    #[error("invalid board data: {0}")]
    InvalidBoardData(String),
}
