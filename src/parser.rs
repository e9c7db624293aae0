//! # Puzzle Parser
//!
//! Converts puzzle text (board rows plus a trailing `Salida: <row>,<col>` line) into a
//! [`Board`] (§4.1). This is the only place a [`Board`] is normally constructed; every
//! invariant in §3 is established here once and relied upon by every solver afterwards.

use regex::Regex;
use std::sync::OnceLock;

use crate::board::{Board, Cell, Orientation, State, Vehicle};
use crate::error::ParseError;

/// Matches a `Salida: <row>,<col>` line (leading/trailing whitespace already trimmed),
/// case-insensitive per §4.1.
fn exit_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^salida\s*:\s*(-?\d+)\s*,\s*(-?\d+)\s*$").expect("valid regex")
    })
}

/// Matches any line whose leading token is `Salida` followed by `:` (§6) — used to find the
/// terminator line even when its coordinates turn out to be malformed.
fn exit_line_marker() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^salida\s*:").expect("valid regex"))
}

fn is_horizontal_token(token: &str) -> bool {
    matches!(token, "-" | ">" | "<" | "B")
}

fn is_vertical_token(token: &str) -> bool {
    matches!(token, "|" | "v" | "B")
}

fn is_known_token(token: &str) -> bool {
    matches!(token, "." | "-" | ">" | "<" | "|" | "v" | "B")
}

/// Parses puzzle text into a [`Board`] (§4.1). Lines are split on LF or CRLF; trailing
/// whitespace is stripped; blank lines are ignored. Returns the corresponding [`ParseError`]
/// variant on any of the documented failure conditions (§7): blank input, a missing or
/// malformed `Salida` line, an empty board portion, inconsistent row widths, or a board with no
/// goal vehicle.
pub fn parse(text: &str) -> Result<Board, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyPuzzle);
    }

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect();

    let marker_pos = lines
        .iter()
        .position(|line| exit_line_marker().is_match(line.trim()))
        .ok_or(ParseError::MissingExit)?;

    let exit_line = lines[marker_pos].trim();
    let captures = exit_line_pattern()
        .captures(exit_line)
        .ok_or_else(|| ParseError::MalformedExit {
            raw: exit_line.to_string(),
        })?;
    let exit_row: i32 = captures[1].parse().map_err(|_| ParseError::MalformedExit {
        raw: exit_line.to_string(),
    })?;
    let exit_col: i32 = captures[2].parse().map_err(|_| ParseError::MalformedExit {
        raw: exit_line.to_string(),
    })?;

    let board_lines = &lines[..marker_pos];
    if board_lines.is_empty() {
        return Err(ParseError::EmptyBoard);
    }

    let grid = tokenize_rows(board_lines)?;
    let rows = grid.len();
    let cols = grid[0].len();

    let (vehicles, initial_anchors, goal_index) = extract_vehicles(&grid)?;

    let board = Board {
        rows,
        cols,
        exit: Cell::new(exit_row, exit_col),
        vehicles,
        goal_index,
        initial_state: State::new(initial_anchors),
    };

    tracing::debug!(
        rows = board.rows,
        cols = board.cols,
        vehicles = board.vehicles.len(),
        "parsed puzzle board"
    );

    Ok(board)
}

/// Splits each board line into whitespace-separated tokens and checks column consistency and
/// token validity.
fn tokenize_rows(board_lines: &[&str]) -> Result<Vec<Vec<String>>, ParseError> {
    let mut grid = Vec::with_capacity(board_lines.len());
    let mut expected_cols = None;

    for (row, line) in board_lines.iter().enumerate() {
        let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();

        match expected_cols {
            None => expected_cols = Some(tokens.len()),
            Some(expected) if expected != tokens.len() => {
                return Err(ParseError::InconsistentColumns {
                    row,
                    expected,
                    found: tokens.len(),
                });
            }
            _ => {}
        }

        for (col, token) in tokens.iter().enumerate() {
            if !is_known_token(token) {
                return Err(ParseError::UnknownToken {
                    row,
                    col,
                    token: token.clone(),
                });
            }
        }

        grid.push(tokens);
    }

    Ok(grid)
}

/// Scans the grid in row-major order, growing one vehicle per unvisited non-empty cell (§4.1).
fn extract_vehicles(
    grid: &[Vec<String>],
) -> Result<(Vec<Vehicle>, Vec<Cell>, usize), ParseError> {
    let rows = grid.len();
    let cols = grid[0].len();
    let mut visited = vec![vec![false; cols]; rows];

    let mut vehicles = Vec::new();
    let mut anchors = Vec::new();
    let mut goal_index = None;
    let mut next_label = 1usize;

    for row in 0..rows {
        for col in 0..cols {
            if visited[row][col] || grid[row][col] == "." {
                continue;
            }

            let orientation = disambiguate_orientation(grid, row, col);
            let (cells, contains_goal_token) =
                grow_vehicle(grid, &mut visited, row, col, orientation);

            let length = cells.len();
            let anchor = cells[0];
            let is_goal = contains_goal_token && goal_index.is_none();
            if is_goal {
                goal_index = Some(vehicles.len());
            }

            let label = if is_goal {
                "carro objetivo".to_string()
            } else {
                let label = next_label.to_string();
                next_label += 1;
                label
            };

            tracing::debug!(
                row,
                col,
                length,
                is_goal,
                label = %label,
                "discovered vehicle"
            );

            vehicles.push(Vehicle {
                orientation,
                length,
                is_goal,
                label,
            });
            anchors.push(anchor);
        }
    }

    let goal_index = goal_index.ok_or_else(|| {
        tracing::warn!("no goal vehicle found while parsing board");
        ParseError::MissingGoalVehicle
    })?;

    Ok((vehicles, anchors, goal_index))
}

/// Decides the orientation of the vehicle seeded at `(row, col)` (§4.1 step 1-2): tokens with
/// disjoint horizontal/vertical membership resolve directly; the ambiguous `B` token is
/// resolved from neighbors, falling back to `Single` if none indicate an axis.
fn disambiguate_orientation(grid: &[Vec<String>], row: usize, col: usize) -> Orientation {
    let token = grid[row][col].as_str();
    let horiz = is_horizontal_token(token);
    let vert = is_vertical_token(token);

    if horiz && !vert {
        return Orientation::Horizontal;
    }
    if vert && !horiz {
        return Orientation::Vertical;
    }

    // Ambiguous (`B`): infer from neighbors.
    let cols = grid[0].len();
    let rows = grid.len();

    if col > 0 && is_horizontal_token(&grid[row][col - 1]) {
        return Orientation::Horizontal;
    }
    if col + 1 < cols && is_horizontal_token(&grid[row][col + 1]) {
        return Orientation::Horizontal;
    }
    if row > 0 && is_vertical_token(&grid[row - 1][col]) {
        return Orientation::Vertical;
    }
    if row + 1 < rows && is_vertical_token(&grid[row + 1][col]) {
        return Orientation::Vertical;
    }

    Orientation::Single
}

/// Greedily absorbs contiguous same-axis tokens starting at `(row, col)`, marking them
/// visited. Returns the absorbed cells in growth order (anchor-first: leftmost for horizontal,
/// topmost for vertical, the single cell for `Single`) and whether any absorbed cell carried
/// the `B` token.
fn grow_vehicle(
    grid: &[Vec<String>],
    visited: &mut [Vec<bool>],
    row: usize,
    col: usize,
    orientation: Orientation,
) -> (Vec<Cell>, bool) {
    let mut contains_goal_token = grid[row][col] == "B";
    visited[row][col] = true;

    match orientation {
        Orientation::Single => (vec![Cell::new(row as i32, col as i32)], contains_goal_token),
        Orientation::Horizontal => {
            let cols = grid[0].len();
            let mut left = col;
            while left > 0 && is_horizontal_token(&grid[row][left - 1]) && !visited[row][left - 1]
            {
                left -= 1;
            }
            let mut right = col;
            while right + 1 < cols
                && is_horizontal_token(&grid[row][right + 1])
                && !visited[row][right + 1]
            {
                right += 1;
            }
            let mut cells = Vec::with_capacity(right - left + 1);
            for c in left..=right {
                visited[row][c] = true;
                if grid[row][c] == "B" {
                    contains_goal_token = true;
                }
                cells.push(Cell::new(row as i32, c as i32));
            }
            (cells, contains_goal_token)
        }
        Orientation::Vertical => {
            let rows = grid.len();
            let mut top = row;
            while top > 0 && is_vertical_token(&grid[top - 1][col]) && !visited[top - 1][col] {
                top -= 1;
            }
            let mut bottom = row;
            while bottom + 1 < rows
                && is_vertical_token(&grid[bottom + 1][col])
                && !visited[bottom + 1][col]
            {
                bottom += 1;
            }
            let mut cells = Vec::with_capacity(bottom - top + 1);
            for r in top..=bottom {
                visited[r][col] = true;
                if grid[r][col] == "B" {
                    contains_goal_token = true;
                }
                cells.push(Cell::new(r as i32, col as i32));
            }
            (cells, contains_goal_token)
        }
    }
}
