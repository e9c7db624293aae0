//! # Move Describer
//!
//! Renders a [`Move`] into a localized, human-readable action string (§4.3). Purely
//! decorative — never consulted by the search itself, only by the result builder once a
//! solver has already terminated.

use crate::board::{Board, Move};

/// Produces `mover <label> <direction-phrase>` when `steps == 1`, or
/// `mover <label> <direction-phrase> <n> espacios` when `steps >= 2`.
pub fn describe_move(board: &Board, mv: &Move) -> String {
    let vehicle = &board.vehicles[mv.vehicle_index];
    let phrase = mv.direction.phrase();
    if mv.steps == 1 {
        format!("mover {} {phrase}", vehicle.label)
    } else {
        format!("mover {} {phrase} {} espacios", vehicle.label, mv.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Direction, Orientation, Vehicle};

    fn board_with_one_vehicle(label: &str) -> Board {
        use crate::board::{Cell, State};
        Board {
            rows: 1,
            cols: 3,
            exit: Cell::new(0, 2),
            vehicles: vec![Vehicle {
                orientation: Orientation::Horizontal,
                length: 2,
                is_goal: label == "carro objetivo",
                label: label.to_string(),
            }],
            goal_index: 0,
            initial_state: State::new(vec![Cell::new(0, 0)]),
        }
    }

    #[test]
    fn single_step_move_has_no_trailing_count() {
        let board = board_with_one_vehicle("carro objetivo");
        let mv = Move {
            vehicle_index: 0,
            direction: Direction::Right,
            steps: 1,
        };
        assert_eq!(
            describe_move(&board, &mv),
            "mover carro objetivo hacia la derecha"
        );
    }

    #[test]
    fn multi_step_move_reports_space_count() {
        let board = board_with_one_vehicle("1");
        let mv = Move {
            vehicle_index: 0,
            direction: Direction::Left,
            steps: 3,
        };
        assert_eq!(
            describe_move(&board, &mv),
            "mover 1 hacia la izquierda 3 espacios"
        );
    }

    #[test]
    fn every_direction_has_a_non_empty_phrase() {
        for direction in crate::board::ALL_DIRECTIONS {
            assert!(!direction.phrase().is_empty());
        }
    }
}
