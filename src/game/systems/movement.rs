//! Animal movement system.
//!
//! Shape legality per species, path checks, and relocation with
//! creature interruption and spell pickup.

use crate::game::entities::{AnimalKind, Spell};
use crate::game::error::{GameError, MoveRejection, Result};
use crate::game::grid::{Board, line_between};
use crate::game::state::{GameState, MOVE_INTERRUPTED, MOVE_SUCCESS};
use crate::game::types::{AnimalId, CreatureId, Position};

/// How a legal move ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    PickedUp(Spell),
    /// Landed directly on the creature's square.
    Encounter(CreatureId),
    /// Stopped early on the first creature along the path.
    Interrupted(CreatureId),
}

impl MoveOutcome {
    pub fn status(self) -> &'static str {
        match self {
            MoveOutcome::Interrupted(_) => MOVE_INTERRUPTED,
            _ => MOVE_SUCCESS,
        }
    }

    pub fn met_creature(self) -> Option<CreatureId> {
        match self {
            MoveOutcome::Encounter(id) | MoveOutcome::Interrupted(id) => Some(id),
            _ => None,
        }
    }
}

/// Whether a species may travel from `from` to `to`, ignoring occupancy.
pub fn legal_shape(kind: AnimalKind, from: Position, to: Position) -> bool {
    let (rows, cols) = (from.row_diff(to), from.col_diff(to));
    let one_diagonal = rows == 1 && cols == 1;

    match kind {
        AnimalKind::Rabbit => straight(rows, cols, 2) || one_diagonal,
        AnimalKind::Fox => straight(rows, cols, 3),
        AnimalKind::Deer => straight(rows, cols, 3) || one_diagonal,
        AnimalKind::Owl => rows == 0 || cols == 0 || one_diagonal,
        AnimalKind::Badger => {
            (rows <= 1 && cols <= 1) || matches!((rows, cols), (2, 0) | (0, 2) | (2, 2))
        }
    }
}

fn straight(rows: usize, cols: usize, reach: usize) -> bool {
    (rows == 0 && cols <= reach) || (cols == 0 && rows <= reach)
}

/// Generic precheck shared by every species: the destination must be free of animals.
pub fn valid_destination(board: &Board, to: Position) -> Result<()> {
    if board.has_animal(to) {
        return Err(GameError::InvalidMove(MoveRejection::Occupied));
    }
    Ok(())
}

/// Move `id` towards `to`, resolving the landing square.
///
/// Nothing is mutated when an error is returned.
pub fn move_animal(game_state: &mut GameState, id: AnimalId, to: Position) -> Result<MoveOutcome> {
    let animal = &game_state.animals[id.0];
    let (from, kind) = (animal.pos, animal.kind);
    let rules = kind.move_rules();
    let board = &game_state.board;

    valid_destination(board, to)?;
    if !legal_shape(kind, from, to) {
        return Err(GameError::InvalidMove(MoveRejection::IllegalShape));
    }

    let path = line_between(from, to);
    if rules.blocked_by_animals && path.iter().any(|pos| board.has_animal(*pos)) {
        return Err(GameError::InvalidMove(MoveRejection::BlockedPath));
    }

    let interruption = if rules.stopped_by_creatures {
        path.iter()
            .find_map(|pos| board.square(*pos).creature.map(|creature| (*pos, creature)))
    } else {
        None
    };

    let (landing, outcome) = if let Some(creature) = board.square(to).creature {
        (to, MoveOutcome::Encounter(creature))
    } else if let Some((stop, creature)) = interruption {
        // Another animal may still be standing on that creature.
        if board.has_animal(stop) {
            return Err(GameError::InvalidMove(MoveRejection::BlockedPath));
        }
        (stop, MoveOutcome::Interrupted(creature))
    } else if let Some(spell) = game_state.board.take_spell(to) {
        game_state.animals[id.0].add_spell(spell);
        (to, MoveOutcome::PickedUp(spell))
    } else {
        (to, MoveOutcome::Moved)
    };

    game_state.board.move_animal(id, from, landing);
    game_state.board.reveal(landing);
    game_state.animals[id.0].pos = landing;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use AnimalKind::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_rabbit_short_jump_shapes() {
        let from = p(10, 10);
        assert!(legal_shape(Rabbit, from, p(8, 10)));
        assert!(legal_shape(Rabbit, from, p(10, 12)));
        assert!(legal_shape(Rabbit, from, p(11, 9)));
        assert!(!legal_shape(Rabbit, from, p(7, 10)));
        assert!(!legal_shape(Rabbit, from, p(12, 12)));
        assert!(!legal_shape(Rabbit, from, p(12, 11)));
    }

    #[test]
    fn test_fox_rejects_every_diagonal() {
        let from = p(10, 10);
        assert!(legal_shape(Fox, from, p(13, 10)));
        assert!(legal_shape(Fox, from, p(10, 7)));
        assert!(!legal_shape(Fox, from, p(14, 10)));
        for d in 1..=3 {
            assert!(!legal_shape(Fox, from, p(10 + d, 10 + d)));
            assert!(!legal_shape(Fox, from, p(10 - d, 10 + d)));
        }
    }

    #[test]
    fn test_deer_long_jump_with_single_diagonal() {
        let from = p(10, 10);
        assert!(legal_shape(Deer, from, p(7, 10)));
        assert!(legal_shape(Deer, from, p(9, 11)));
        assert!(!legal_shape(Deer, from, p(8, 12)));
        assert!(!legal_shape(Deer, from, p(10, 14)));
    }

    #[test]
    fn test_owl_flies_whole_lines() {
        let from = p(10, 10);
        assert!(legal_shape(Owl, from, p(0, 10)));
        assert!(legal_shape(Owl, from, p(10, 19)));
        assert!(legal_shape(Owl, from, p(11, 11)));
        assert!(!legal_shape(Owl, from, p(12, 12)));
        assert!(!legal_shape(Owl, from, p(12, 11)));
    }

    #[test]
    fn test_badger_digs_one_or_two() {
        let from = p(10, 10);
        for (row, col) in [(9, 9), (9, 10), (11, 11), (10, 9), (8, 10), (10, 12), (12, 12), (8, 8)] {
            assert!(legal_shape(Badger, from, p(row, col)), "({row}, {col})");
        }
        assert!(!legal_shape(Badger, from, p(12, 11)));
        assert!(!legal_shape(Badger, from, p(13, 10)));
    }

    #[test]
    fn test_shapes_are_symmetric() {
        let a = p(10, 10);
        for kind in AnimalKind::ROSTER {
            for row in 5..=15 {
                for col in 5..=15 {
                    let b = p(row, col);
                    assert_eq!(legal_shape(kind, a, b), legal_shape(kind, b, a));
                }
            }
        }
    }

    #[test]
    fn test_occupied_destination_is_rejected() {
        let mut board = Board::new();
        board.place_animal(AnimalId(0), p(5, 5));
        assert_eq!(
            valid_destination(&board, p(5, 5)),
            Err(GameError::InvalidMove(MoveRejection::Occupied))
        );
        assert!(valid_destination(&board, p(5, 6)).is_ok());
    }
}
