//! # Board Module
//!
//! This module contains the data model for a Rush-Hour-family puzzle (§3 of the design) and
//! the state kernel operations that define the implicit state graph: occupancy projection,
//! move generation, move application, and the goal test (§4.2).
//!
//! A [`Board`] is the immutable, parser-produced puzzle definition: grid dimensions, the exit
//! cell, and the ordered vehicle list. A [`State`] is the mutable part — the vector of vehicle
//! anchors — that the solvers clone and transform as they explore the search space. Keeping the
//! two separate (rather than the teacher's single packed `Board(u32)`, which conflates the fixed
//! 8-puzzle layout with its single mutable permutation) lets every solver clone a `State`
//! cheaply without recomputing vehicle metadata, and lets many `State`s share one `Board`.

use std::fmt::Display;

use crate::error::SolverError;

use Direction::*;

/// All four move directions, ordered so that deriving `Ord` on [`Direction`] matches §4.6's
/// required deterministic tie-break order `down < left < right < up`.
pub const ALL_DIRECTIONS: [Direction; 4] = [Down, Left, Right, Up];

/// The orientation of a vehicle, fixed for its lifetime (§3: "orientation and length are
/// immutable; only its anchor changes").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Occupies consecutive cells in the same row.
    Horizontal,
    /// Occupies consecutive cells in the same column.
    Vertical,
    /// Occupies exactly one cell.
    Single,
}

/// A direction a vehicle slide can take. Horizontal and single vehicles may move
/// [`Direction::Left`]/[`Direction::Right`]; vertical and single vehicles may move
/// [`Direction::Down`]/[`Direction::Up`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Toward increasing row.
    Down,
    /// Toward decreasing column.
    Left,
    /// Toward increasing column.
    Right,
    /// Toward decreasing row.
    Up,
}

impl Direction {
    /// Localized direction phrase used by the move describer (§4.3).
    pub fn phrase(self) -> &'static str {
        match self {
            Down => "hacia abajo",
            Left => "hacia la izquierda",
            Right => "hacia la derecha",
            Up => "hacia arriba",
        }
    }

    fn row_delta(self) -> i32 {
        match self {
            Down => 1,
            Up => -1,
            Left | Right => 0,
        }
    }

    fn col_delta(self) -> i32 {
        match self {
            Right => 1,
            Left => -1,
            Down | Up => 0,
        }
    }
}

/// A single grid cell. Also used to represent the exit, which §4.1 permits to lie outside the
/// grid, hence signed coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cell {
    /// Row coordinate, zero-based.
    pub row: i32,
    /// Column coordinate, zero-based.
    pub col: i32,
}

impl Cell {
    /// Builds a cell from a row/column pair.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    fn translated(self, direction: Direction, steps: i32) -> Cell {
        Cell {
            row: self.row + direction.row_delta() * steps,
            col: self.col + direction.col_delta() * steps,
        }
    }
}

/// Static, per-vehicle metadata carried by the [`Board`]. The mutable anchor lives in [`State`]
/// at the same index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vehicle {
    /// Whether the vehicle slides along rows, columns, or occupies a single cell.
    pub orientation: Orientation,
    /// Number of cells the vehicle occupies; always ≥ 1.
    pub length: usize,
    /// Whether this is the distinguished goal vehicle.
    pub is_goal: bool,
    /// Human-readable label: a 1-based discovery number, or `"carro objetivo"` for the goal.
    pub label: String,
}

/// A single edge of the state graph: slide vehicle `vehicle_index` `steps` cells in
/// `direction`. Unit cost regardless of `steps` (§4.2 — a deliberate, documented design choice).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    /// Index into `Board::vehicles` / `State`'s anchor vector.
    pub vehicle_index: usize,
    /// The slide direction.
    pub direction: Direction,
    /// Number of cells to translate the anchor by; always ≥ 1.
    pub steps: usize,
}

/// The mutable part of a puzzle instant: one anchor cell per vehicle, indexed exactly as
/// `Board::vehicles`. Two states are equal iff all anchors are pairwise equal (§3), which is
/// exactly what `#[derive(PartialEq, Eq, Hash)]` on a `Vec<Cell>` gives for free — no string
/// key is needed for visited-set membership. [`State::canonical_key`] still renders the
/// delimited string form the spec describes, for callers (tests, logging) that want it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State(Vec<Cell>);

impl State {
    /// Builds a state from anchor cells, one per vehicle in board order.
    pub fn new(anchors: Vec<Cell>) -> Self {
        Self(anchors)
    }

    /// The anchor of vehicle `index`.
    pub fn anchor(&self, index: usize) -> Cell {
        self.0[index]
    }

    /// Number of vehicles tracked by this state.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this state tracks no vehicles at all (always false for a board-derived state).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy of this state with vehicle `index`'s anchor translated by
    /// `direction * steps`; every other anchor is copied unchanged (§4.2 move application —
    /// functional update, the input is never mutated).
    fn with_anchor_translated(&self, index: usize, direction: Direction, steps: usize) -> State {
        let mut anchors = self.0.clone();
        anchors[index] = anchors[index].translated(direction, steps as i32);
        State(anchors)
    }

    /// Canonical key: `r0,c0|r1,c1|...|rn-1,cn-1`, in vehicle index order (§3). Two states
    /// produce identical keys iff they are equal.
    pub fn canonical_key(&self) -> String {
        self.0
            .iter()
            .map(|c| format!("{},{}", c.row, c.col))
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// An immutable, parser-produced puzzle definition: grid dimensions, the exit cell, and the
/// ordered vehicle list (§3). Created once from text and shared read-only across every search
/// (§5) — cheap to clone behind an `Arc`, never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// The exit cell the goal vehicle must reach.
    pub exit: Cell,
    /// Vehicles in parser discovery order; this order is load-bearing (every `State` is
    /// positionally indexed by it).
    pub vehicles: Vec<Vehicle>,
    /// Index into `vehicles` of the distinguished goal vehicle.
    pub goal_index: usize,
    /// The board's starting configuration.
    pub initial_state: State,
}

impl Board {
    /// Defensive structural check a solver entry point runs before searching (§7:
    /// `InvalidBoardData` is a programming-bug signal, not a search outcome). The public parser
    /// never produces a board that fails this check; it guards hand-constructed boards.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.vehicles.is_empty() {
            return Err(SolverError::InvalidBoardData(
                "board has no vehicles".into(),
            ));
        }
        if self.goal_index >= self.vehicles.len() {
            return Err(SolverError::InvalidBoardData(format!(
                "goal_index {} out of range for {} vehicles",
                self.goal_index,
                self.vehicles.len()
            )));
        }
        if !self.vehicles[self.goal_index].is_goal {
            return Err(SolverError::InvalidBoardData(
                "goal_index does not point at a goal vehicle".into(),
            ));
        }
        if self.initial_state.len() != self.vehicles.len() {
            return Err(SolverError::InvalidBoardData(
                "initial state length does not match vehicle count".into(),
            ));
        }
        Ok(())
    }

    /// The goal vehicle's static metadata.
    pub fn goal_vehicle(&self) -> &Vehicle {
        &self.vehicles[self.goal_index]
    }

    /// Every cell vehicle `index` occupies in `state`, anchor-first (§3: a vehicle of length L
    /// and anchor (r, c) occupies L cells walking in its orientation).
    pub fn vehicle_cells(&self, state: &State, index: usize) -> Vec<Cell> {
        let vehicle = &self.vehicles[index];
        let anchor = state.anchor(index);
        match vehicle.orientation {
            Orientation::Horizontal => (0..vehicle.length as i32)
                .map(|d| Cell::new(anchor.row, anchor.col + d))
                .collect(),
            Orientation::Vertical => (0..vehicle.length as i32)
                .map(|d| Cell::new(anchor.row + d, anchor.col))
                .collect(),
            Orientation::Single => vec![anchor],
        }
    }

    /// Builds the R×C occupancy matrix for `state`: entry `r * cols + c` holds the index of
    /// the occupying vehicle, or `-1` if empty (§4.2). Cost is O(R·C + Σ Lᵢ).
    pub fn occupancy(&self, state: &State) -> Vec<i32> {
        let mut grid = vec![-1i32; self.rows * self.cols];
        for index in 0..self.vehicles.len() {
            for cell in self.vehicle_cells(state, index) {
                if self.in_bounds(cell) {
                    grid[cell.row as usize * self.cols + cell.col as usize] = index as i32;
                }
            }
        }
        grid
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    /// Directions `orientation` may legally slide in.
    fn legal_directions(orientation: Orientation) -> &'static [Direction] {
        match orientation {
            Orientation::Horizontal => &[Left, Right],
            Orientation::Vertical => &[Down, Up],
            Orientation::Single => &ALL_DIRECTIONS,
        }
    }

    /// Enumerates every legal move from `state` (§4.2). For each vehicle and each direction it
    /// may slide in, walks outward one cell at a time, emitting one move per step value for
    /// which every newly covered cell is empty; stops at the first occupied or out-of-bounds
    /// cell. This yields one edge per `(vehicle, direction, step)` tuple — a slide of three
    /// cells is three distinct moves, not one "slide as far as possible" edge.
    ///
    /// Moves are produced in `(vehicle_index, direction, steps)` order, where `direction`
    /// follows [`ALL_DIRECTIONS`] filtered to the vehicle's orientation. That order already
    /// satisfies §4.6's DFS determinism requirement (vehicle index ascending, then direction
    /// `down < left < right < up`) without a separate sort pass.
    pub fn generate_moves(&self, state: &State) -> Vec<Move> {
        let occupancy = self.occupancy(state);
        let mut moves = Vec::new();
        for (index, vehicle) in self.vehicles.iter().enumerate() {
            for &direction in Self::legal_directions(vehicle.orientation) {
                self.collect_moves_one_direction(
                    state,
                    &occupancy,
                    index,
                    vehicle,
                    direction,
                    &mut moves,
                );
            }
        }
        moves
    }

    fn collect_moves_one_direction(
        &self,
        state: &State,
        occupancy: &[i32],
        index: usize,
        _vehicle: &Vehicle,
        direction: Direction,
        moves: &mut Vec<Move>,
    ) {
        let body = self.vehicle_cells(state, index);
        // The leading edge in `direction` is the only cell each further step needs to check.
        let leading = match direction {
            Left | Up => body[0],
            Right | Down => *body.last().unwrap(),
        };

        let mut steps = 1;
        loop {
            let candidate = leading.translated(direction, steps);
            if !self.in_bounds(candidate) {
                break;
            }
            let occupant = occupancy[candidate.row as usize * self.cols + candidate.col as usize];
            if occupant != -1 && occupant != index as i32 {
                break;
            }
            moves.push(Move {
                vehicle_index: index,
                direction,
                steps: steps as usize,
            });
            steps += 1;
        }
    }

    /// Applies `mv` to `state`, returning a fresh state; `state` is never mutated (§4.2).
    pub fn apply_move(&self, state: &State, mv: &Move) -> State {
        state.with_anchor_translated(mv.vehicle_index, mv.direction, mv.steps)
    }

    /// Whether `state` is terminal: the goal vehicle's occupied cells include the exit cell
    /// (§4.2).
    pub fn goal_test(&self, state: &State) -> bool {
        let vehicle = self.goal_vehicle();
        let anchor = state.anchor(self.goal_index);
        match vehicle.orientation {
            Orientation::Horizontal => {
                anchor.row == self.exit.row
                    && self.exit.col >= anchor.col
                    && self.exit.col < anchor.col + vehicle.length as i32
            }
            Orientation::Vertical => {
                anchor.col == self.exit.col
                    && self.exit.row >= anchor.row
                    && self.exit.row < anchor.row + vehicle.length as i32
            }
            Orientation::Single => anchor == self.exit,
        }
    }
}

/// Pretty-prints the occupancy grid of the board's initial state, one hex digit per vehicle
/// index (`.` for empty), purely for debugging/CLI display.
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let grid = self.occupancy(&self.initial_state);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let v = grid[row * self.cols + col];
                if v < 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{:X} ", v % 16)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_board() -> Board {
        // 1x3 row: goal vehicle (length 2, horizontal) at cols 0-1, exit at col 2.
        Board {
            rows: 1,
            cols: 3,
            exit: Cell::new(0, 2),
            vehicles: vec![Vehicle {
                orientation: Orientation::Horizontal,
                length: 2,
                is_goal: true,
                label: "carro objetivo".into(),
            }],
            goal_index: 0,
            initial_state: State::new(vec![Cell::new(0, 0)]),
        }
    }

    #[test]
    fn generates_right_slides_up_to_the_wall() {
        let board = tiny_board();
        let moves = board.generate_moves(&board.initial_state);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].direction, Direction::Right);
        assert_eq!(moves[0].steps, 1);
    }

    #[test]
    fn apply_move_translates_only_the_moved_vehicle() {
        let board = tiny_board();
        let mv = Move {
            vehicle_index: 0,
            direction: Direction::Right,
            steps: 1,
        };
        let next = board.apply_move(&board.initial_state, &mv);
        assert_eq!(next.anchor(0), Cell::new(0, 1));
        assert!(board.goal_test(&next));
    }

    #[test]
    fn move_does_not_mutate_input_state() {
        let board = tiny_board();
        let before = board.initial_state.clone();
        let mv = Move {
            vehicle_index: 0,
            direction: Direction::Right,
            steps: 1,
        };
        let _ = board.apply_move(&board.initial_state, &mv);
        assert_eq!(board.initial_state, before);
    }

    #[test]
    fn canonical_key_matches_spec_format() {
        let state = State::new(vec![Cell::new(1, 2), Cell::new(0, 3)]);
        assert_eq!(state.canonical_key(), "1,2|0,3");
    }

    #[test]
    fn direction_ordering_matches_dfs_tie_break() {
        let mut dirs = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];
        dirs.sort();
        assert_eq!(
            dirs,
            [
                Direction::Down,
                Direction::Left,
                Direction::Right,
                Direction::Up
            ]
        );
    }
}
