//! Spell catalog and spell pickup placement.

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::game::{BOARD_ROWS, BOARD_COLS};
use crate::game::grid::Board;
use crate::game::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Spell {
    Detect,
    Heal,
    Shield,
    Confuse,
    Charm,
}

impl Spell {
    /// Catalog order. Pickup kinds are drawn by index into this array.
    pub const ALL: [Spell; 5] = [
        Spell::Detect,
        Spell::Heal,
        Spell::Shield,
        Spell::Confuse,
        Spell::Charm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Spell::Detect => "Detect",
            Spell::Heal => "Heal",
            Spell::Shield => "Shield",
            Spell::Confuse => "Confuse",
            Spell::Charm => "Charm",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Spell::Detect => "The detect spell allows the animal to detect the mythical creatures on the adjacent squares.",
            Spell::Heal => "The heal spell allows the animal to heal 10 life points.",
            Spell::Shield => "The shield spell allows the animal to block a mythical creature attack for that turn",
            Spell::Confuse => "The confuse spell allows the animal to confuse a mythical creature on a square adjacent to the animal but not the square the animal is occupying. The mythical creature will not attack any animal for the next turn.",
            Spell::Charm => "The charm spell allows the animal to charm a mythical creature on a square adjacent to the animal but not the square the animal is occupying. The mythical creature will not attack the charming animal for the next three turns",
        }
    }

    /// Look a spell up by its display name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Spell> {
        Spell::ALL.into_iter().find(|spell| spell.name() == name)
    }
}

/// Scatter `count` spell pickups on rows 1..=18, never on a creature or on another pickup.
///
/// Each placement draws the kind first, then redraws (row, col) until the square is free.
pub fn scatter_spells<R: Rng>(board: &mut Board, rng: &mut R, count: usize) {
    for _ in 0..count {
        let spell = Spell::ALL[rng.random_range(0..Spell::ALL.len())];
        let mut pos = random_inner_square(rng);
        while board.has_creature(pos) || board.has_spell(pos) {
            pos = random_inner_square(rng);
        }
        board.place_spell(spell, pos);
    }
}

/// A random square off the top and bottom rows.
pub(crate) fn random_inner_square<R: Rng>(rng: &mut R) -> Position {
    let row = rng.random_range(0..BOARD_ROWS - 2) + 1;
    let col = rng.random_range(0..BOARD_COLS);
    Position::new(row, col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(Spell::from_name("Heal"), Some(Spell::Heal));
        assert_eq!(Spell::from_name("Charm"), Some(Spell::Charm));
        assert_eq!(Spell::from_name("heal"), None);
        assert_eq!(Spell::from_name(""), None);
    }

    #[test]
    fn test_scatter_spells_fills_distinct_inner_squares() {
        let mut board = Board::new();
        let mut rng = ChaCha12Rng::seed_from_u64(11);
        scatter_spells(&mut board, &mut rng, 10);

        let mut count = 0;
        for (row, squares) in board.rows().enumerate() {
            for square in squares.iter().filter(|sq| sq.has_spell()) {
                assert!(row >= 1 && row <= BOARD_ROWS - 2);
                assert!(!square.has_creature());
                count += 1;
            }
        }
        assert_eq!(count, 10);
    }
}
