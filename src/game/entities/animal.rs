//! Animal entity logic.
//!
//! The five species, their movement rules, and spawning on the bottom row.

use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::game::{BOARD_COLS, START_ROW, STARTING_LIFE};
use crate::game::entities::Spell;
use crate::game::grid::Board;
use crate::game::types::{AnimalId, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalKind {
    Rabbit,
    Fox,
    Deer,
    Owl,
    Badger,
}

/// How a species gets from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ShortJump,
    LongJump,
    Fly,
    Dig,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Capability::ShortJump | Capability::LongJump => "jumps",
            Capability::Fly => "flies",
            Capability::Dig => "digs",
        };
        f.write_str(verb)
    }
}

/// Path rules attached to a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRules {
    pub capability: Capability,
    /// Another animal strictly between origin and destination makes the move illegal.
    pub blocked_by_animals: bool,
    /// A creature strictly between origin and destination stops the animal on it.
    pub stopped_by_creatures: bool,
}

impl AnimalKind {
    /// Roster order. Turn order follows it.
    pub const ROSTER: [AnimalKind; 5] = [
        AnimalKind::Rabbit,
        AnimalKind::Fox,
        AnimalKind::Deer,
        AnimalKind::Owl,
        AnimalKind::Badger,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AnimalKind::Rabbit => "Rabbit",
            AnimalKind::Fox => "Fox",
            AnimalKind::Deer => "Deer",
            AnimalKind::Owl => "Owl",
            AnimalKind::Badger => "Badger",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AnimalKind::Rabbit => "The rabbit has fluffy ears and tail. The rabbit really likes to eat grass.",
            AnimalKind::Fox => "The fox has a bushy tail. The fox really enjoys looking at butterflies in the sunlight.",
            AnimalKind::Deer => "The deer has antlers. The deer is recently divorced and is looking for a new partner.",
            AnimalKind::Owl => "The owl has wings. The owl has prescription contact lenses but cannot put them on.",
            AnimalKind::Badger => "The badger has a black and white face. The badger is a often mistaken for a very small panda. The badger wears a t-shirt that says “I am not a panda” to combat this. ",
        }
    }

    pub fn move_rules(self) -> MoveRules {
        match self {
            AnimalKind::Rabbit => MoveRules {
                capability: Capability::ShortJump,
                blocked_by_animals: true,
                stopped_by_creatures: true,
            },
            AnimalKind::Fox => MoveRules {
                capability: Capability::LongJump,
                blocked_by_animals: true,
                stopped_by_creatures: true,
            },
            AnimalKind::Deer => MoveRules {
                capability: Capability::LongJump,
                blocked_by_animals: false,
                stopped_by_creatures: true,
            },
            AnimalKind::Owl => MoveRules {
                capability: Capability::Fly,
                blocked_by_animals: false,
                stopped_by_creatures: true,
            },
            AnimalKind::Badger => MoveRules {
                capability: Capability::Dig,
                blocked_by_animals: false,
                stopped_by_creatures: false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub name: String,
    pub kind: AnimalKind,
    pub life: i32,
    pub pos: Position,
    /// Held spells and their remaining charges. Kinds with no charge left are removed.
    pub spells: BTreeMap<Spell, u32>,
    pub shielded: bool,
}

impl Animal {
    pub fn new(kind: AnimalKind, pos: Position) -> Self {
        Self {
            name: kind.name().to_string(),
            kind,
            life: STARTING_LIFE,
            pos,
            spells: BTreeMap::new(),
            shielded: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    pub fn heal(&mut self, amount: i32) {
        self.life += amount;
    }

    pub fn attacked(&mut self, attack_value: i32) {
        self.life -= attack_value;
    }

    pub fn add_spell(&mut self, spell: Spell) {
        *self.spells.entry(spell).or_insert(0) += 1;
    }

    pub fn charges(&self, spell: Spell) -> u32 {
        self.spells.get(&spell).copied().unwrap_or(0)
    }

    /// Use one charge of `spell`. Returns false when none was held.
    pub fn spend_spell(&mut self, spell: Spell) -> bool {
        let Some(charges) = self.spells.get_mut(&spell) else {
            return false;
        };
        *charges -= 1;
        if *charges == 0 {
            self.spells.remove(&spell);
        }
        true
    }
}

/// Create the roster and place each animal on a random free column of the bottom row.
/// Starting squares are revealed.
pub fn spawn_animals<R: Rng>(board: &mut Board, rng: &mut R) -> Vec<Animal> {
    let mut animals = Vec::with_capacity(AnimalKind::ROSTER.len());
    for (i, kind) in AnimalKind::ROSTER.into_iter().enumerate() {
        let mut col = rng.random_range(0..BOARD_COLS);
        while board.has_animal(Position::new(START_ROW, col)) {
            col = rng.random_range(0..BOARD_COLS);
        }
        let pos = Position::new(START_ROW, col);
        board.place_animal(AnimalId(i), pos);
        board.reveal(pos);
        animals.push(Animal::new(kind, pos));
    }
    animals
}
