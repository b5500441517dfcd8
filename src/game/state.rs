use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::config::game::{ANIMAL_COUNT, SPELL_PICKUPS};
use crate::game::entities::{Animal, Creature, Spell, spawn_animals, spawn_creatures, scatter_spells};
use crate::game::error::{GameError, MoveRejection, Result, SpellRejection};
use crate::game::grid::Board;
use crate::game::snapshot::{Snapshot, build_snapshot};
use crate::game::systems::{
    AttackOutcome, TurnFlags, begin_turn, cast_spell, move_animal, next_index, resolve_attack,
};
use crate::game::types::{AnimalId, Outcome, Phase, Position};

pub const MOVE_SUCCESS: &str = "The last move was successful.";
pub const MOVE_INTERRUPTED: &str = "The last move was interrupted by a creature.";
pub const SPELL_SUCCESS: &str = "The last spell was successful.";
pub const TURN_PASSED: &str = "The turn was passed.";

/// The whole game: board, entities, and the turn state machine.
///
/// Every operation runs to completion synchronously; callers serialize access.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the layout was drawn from.
    pub seed: u64,
    pub board: Board,
    /// Fixed roster, in turn order. Dead animals stay here.
    pub animals: Vec<Animal>,
    pub creatures: Vec<Creature>,
    pub current: usize,
    pub phase: Phase,
    pub flags: TurnFlags,
    pub status: String,
    pub game_over: bool,
}

impl GameState {
    /// Build a new game. The same seed always yields the same layout:
    /// animal columns are drawn first, then creature squares, then spell pickups.
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        let mut board = Board::new();

        let animals = spawn_animals(&mut board, &mut rng);
        let creatures = spawn_creatures(&mut board, &mut rng);
        scatter_spells(&mut board, &mut rng, SPELL_PICKUPS);
        debug_assert_eq!(animals.len(), ANIMAL_COUNT);

        GameState {
            seed,
            board,
            animals,
            creatures,
            current: 0,
            phase: Phase::Move,
            flags: TurnFlags::default(),
            status: String::new(),
            game_over: false,
        }
    }

    /// Throw the current game away and start over from `seed`.
    pub fn reset(&mut self, seed: u64) {
        *self = GameState::new(seed);
    }

    pub fn animal_id(&self, name: &str) -> Result<AnimalId> {
        self.animals
            .iter()
            .position(|animal| animal.name == name)
            .map(AnimalId)
            .ok_or_else(|| GameError::UnknownAnimal(name.to_string()))
    }

    pub fn current_id(&self) -> AnimalId {
        AnimalId(self.current % ANIMAL_COUNT)
    }

    pub fn next_id(&self) -> AnimalId {
        AnimalId((self.current + 1) % ANIMAL_COUNT)
    }

    pub fn current_animal(&self) -> &Animal {
        &self.animals[self.current_id().0]
    }

    pub fn next_animal(&self) -> &Animal {
        &self.animals[self.next_id().0]
    }

    /// Move `animal` to (row, col). Only the current animal may move, and only in the move phase.
    pub fn apply_move(&mut self, animal: &str, row: i64, col: i64) -> Outcome {
        let result = self.try_move(animal, row, col);
        self.outcome(result)
    }

    /// Cast `spell` for `animal` during the spell phase.
    ///
    /// The current animal ends its turn with this call; a spell it does not hold
    /// counts as a pass. The next animal in the roster may cast ahead of its turn.
    pub fn apply_spell(&mut self, animal: &str, spell: &str) -> Outcome {
        let result = self.try_spell(animal, spell);
        self.outcome(result)
    }

    pub fn snapshot(&self) -> Snapshot {
        build_snapshot(self, false)
    }

    /// Snapshot with every square shown, hidden or not.
    pub fn debug_snapshot(&self) -> Snapshot {
        build_snapshot(self, true)
    }

    fn outcome(&mut self, result: Result<()>) -> Outcome {
        match result {
            Ok(()) => Outcome { accepted: true, status: self.status.clone() },
            Err(GameError::GameOver) => Outcome { accepted: false, status: self.status.clone() },
            Err(err) => {
                self.status = err.to_string();
                Outcome { accepted: false, status: self.status.clone() }
            }
        }
    }

    fn try_move(&mut self, name: &str, row: i64, col: i64) -> Result<()> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        let id = self.animal_id(name)?;
        if id != self.current_id() {
            return Err(GameError::InvalidMove(MoveRejection::NotYourTurn));
        }
        if self.phase != Phase::Move {
            return Err(GameError::InvalidMove(MoveRejection::WrongPhase));
        }
        let to = Position::checked(row, col)
            .ok_or(GameError::InvalidMove(MoveRejection::OffBoard))?;

        let outcome = move_animal(self, id, to)?;
        let animal = &self.animals[id.0];
        debug!(
            "[Game] {} {} to ({}, {}): {:?}",
            animal.name,
            animal.kind.move_rules().capability,
            animal.pos.row,
            animal.pos.col,
            outcome
        );

        if outcome.met_creature().is_some() {
            self.flags.next_turn = true;
        }
        self.status = outcome.status().to_string();
        self.phase = Phase::Spell;
        Ok(())
    }

    fn try_spell(&mut self, name: &str, spell_name: &str) -> Result<()> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        let id = self.animal_id(name)?;
        if self.phase != Phase::Spell {
            return Err(GameError::InvalidSpell(SpellRejection::WrongPhase));
        }
        let held = Spell::from_name(spell_name)
            .filter(|spell| self.animals[id.0].charges(*spell) > 0);

        if id == self.current_id() {
            match held {
                Some(spell) => {
                    cast_spell(self, id, spell)?;
                    debug!("[Game] {} casts {}", name, spell.name());
                    self.flags.current_used_spell = true;
                    self.status = SPELL_SUCCESS.to_string();
                }
                None => {
                    debug!("[Game] {} passes (requested {:?})", name, spell_name);
                    self.status = TURN_PASSED.to_string();
                }
            }
            self.end_turn();
            Ok(())
        } else if id == self.next_id() {
            let spell = held.ok_or(GameError::InvalidSpell(SpellRejection::NoCharge))?;
            cast_spell(self, id, spell)?;
            debug!("[Game] {} casts {} ahead of its turn", name, spell.name());
            self.flags.next_used_spell = true;
            self.status = SPELL_SUCCESS.to_string();
            Ok(())
        } else {
            Err(GameError::InvalidSpell(SpellRejection::NotYourTurn))
        }
    }

    /// Resolve the current animal's combat, then hand the turn on.
    fn end_turn(&mut self) {
        let id = self.current_id();
        match resolve_attack(self, id) {
            AttackOutcome::Killed { creature, damage } => {
                let animal = &self.animals[id.0];
                let creature = self.creatures[creature.0].kind.name();
                info!("[Game] {} took {} damage from {} and died", animal.name, damage, creature);
                self.status = format!("The {} was defeated by the {}.", animal.name, creature);
                self.game_over = true;
                return;
            }
            AttackOutcome::Hit { creature, damage } => {
                debug!(
                    "[Game] {} took {} damage from {}",
                    self.animals[id.0].name,
                    damage,
                    self.creatures[creature.0].kind.name()
                );
            }
            AttackOutcome::Spared(creature) => {
                debug!(
                    "[Game] {} was spared by {}",
                    self.animals[id.0].name,
                    self.creatures[creature.0].kind.name()
                );
            }
            AttackOutcome::NoCreature => {}
        }

        let names: Vec<&str> = self.animals.iter().map(|a| a.name.as_str()).collect();
        let next = next_index(&names, self.current, &self.flags);
        self.current = next;
        self.flags = TurnFlags::default();
        self.phase = Phase::Move;
        begin_turn(self, AnimalId(next));
    }
}
