//! Creature entity logic.
//!
//! Creatures never move. They hold the per-animal protections (charm, shield)
//! and the confusion state that decide whether an attack lands.

use std::collections::BTreeMap;

use rand::Rng;

use crate::config::game::CHARM_TURNS;
use crate::game::entities::spell::random_inner_square;
use crate::game::grid::Board;
use crate::game::types::{AnimalId, CreatureId, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreatureKind {
    UnderAppreciatedUnicorn,
    ComplicatedCentaur,
    DeceptiveDragon,
    PrecociousPhoenix,
    SassySphinx,
}

impl CreatureKind {
    /// Placement order at game start.
    pub const ROSTER: [CreatureKind; 5] = [
        CreatureKind::UnderAppreciatedUnicorn,
        CreatureKind::ComplicatedCentaur,
        CreatureKind::DeceptiveDragon,
        CreatureKind::PrecociousPhoenix,
        CreatureKind::SassySphinx,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CreatureKind::UnderAppreciatedUnicorn => "Under-appreciated Unicorn",
            CreatureKind::ComplicatedCentaur => "Complicated Centaur",
            CreatureKind::DeceptiveDragon => "Deceptive Dragon",
            CreatureKind::PrecociousPhoenix => "Precocious Phoenix",
            CreatureKind::SassySphinx => "Sassy Sphinx",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            CreatureKind::UnderAppreciatedUnicorn => "UU",
            CreatureKind::ComplicatedCentaur => "CC",
            CreatureKind::DeceptiveDragon => "DD",
            CreatureKind::PrecociousPhoenix => "PP",
            CreatureKind::SassySphinx => "SS",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CreatureKind::UnderAppreciatedUnicorn => "The UU is a unicorn that is under-appreciated by the other mythical creatures because it is often mistaken for a horse with a horn",
            CreatureKind::ComplicatedCentaur => "The CC is a centaur that has mixed feelings about its love interest, a horse. The centaur is unsure whether they can love them fully.",
            CreatureKind::DeceptiveDragon => "The DD is a dragon that practices social engineering. The dragon is very good at sending phishing emails pretending to be a prince",
            CreatureKind::PrecociousPhoenix => "The PP is a phoenix that is very precocious. The phoenix understands the meaning of life and the universe",
            CreatureKind::SassySphinx => "The SS is a sphinx that is very sassy. The sphinx is very good at giving sarcastic answers to questions",
        }
    }

    pub fn attack_value(self) -> i32 {
        match self {
            CreatureKind::UnderAppreciatedUnicorn => 14,
            CreatureKind::ComplicatedCentaur => 36,
            CreatureKind::DeceptiveDragon => 29,
            CreatureKind::PrecociousPhoenix => 42,
            CreatureKind::SassySphinx => 21,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub kind: CreatureKind,
    pub pos: Position,
    pub attack: i32,
    /// Set while confused, holding the animal that caused it.
    pub confused_by: Option<AnimalId>,
    /// Charming animals and the number of their turns the charm still covers.
    pub charmed_by: BTreeMap<AnimalId, u32>,
    pub shielded: Vec<AnimalId>,
}

impl Creature {
    pub fn new(kind: CreatureKind, pos: Position) -> Self {
        Self {
            kind,
            pos,
            attack: kind.attack_value(),
            confused_by: None,
            charmed_by: BTreeMap::new(),
            shielded: Vec::new(),
        }
    }

    pub fn is_confused(&self) -> bool {
        self.confused_by.is_some()
    }

    pub fn is_charmed_by(&self, animal: AnimalId) -> bool {
        self.charmed_by.get(&animal).is_some_and(|turns| *turns > 0)
    }

    pub fn is_shielding(&self, animal: AnimalId) -> bool {
        self.shielded.contains(&animal)
    }

    /// True when this creature may not damage `animal` right now.
    pub fn spares(&self, animal: AnimalId) -> bool {
        self.is_charmed_by(animal) || self.is_confused() || self.is_shielding(animal)
    }

    pub fn charm(&mut self, animal: AnimalId) {
        self.charmed_by.insert(animal, CHARM_TURNS);
    }

    pub fn confuse(&mut self, animal: AnimalId) {
        self.confused_by = Some(animal);
    }

    pub fn shield(&mut self, animal: AnimalId) {
        if !self.is_shielding(animal) {
            self.shielded.push(animal);
        }
    }

    /// Called when `animal` starts a turn: its charm ticks down, its confusion
    /// wears off and its shield drops.
    pub fn expire_effects(&mut self, animal: AnimalId) {
        if let Some(turns) = self.charmed_by.get_mut(&animal) {
            *turns = turns.saturating_sub(1);
            if *turns == 0 {
                self.charmed_by.remove(&animal);
            }
        }
        if self.confused_by == Some(animal) {
            self.confused_by = None;
        }
        self.shielded.retain(|a| *a != animal);
    }
}

/// Place the five creatures on random squares of rows 1..=18, one per square.
pub fn spawn_creatures<R: Rng>(board: &mut Board, rng: &mut R) -> Vec<Creature> {
    let mut creatures = Vec::with_capacity(CreatureKind::ROSTER.len());
    for (i, kind) in CreatureKind::ROSTER.into_iter().enumerate() {
        let mut pos = random_inner_square(rng);
        while board.has_creature(pos) {
            pos = random_inner_square(rng);
        }
        board.place_creature(CreatureId(i), pos);
        creatures.push(Creature::new(kind, pos));
    }
    creatures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charm_covers_three_turns_of_the_caster() {
        let mut creature = Creature::new(CreatureKind::SassySphinx, Position::new(4, 4));
        let caster = AnimalId(1);
        creature.charm(caster);
        assert!(creature.spares(caster));
        assert!(!creature.spares(AnimalId(0)));

        creature.expire_effects(caster);
        assert!(creature.is_charmed_by(caster));
        creature.expire_effects(caster);
        assert!(creature.is_charmed_by(caster));
        creature.expire_effects(caster);
        assert!(!creature.is_charmed_by(caster));
        assert!(creature.charmed_by.is_empty());
    }

    #[test]
    fn test_confusion_clears_only_for_its_cause() {
        let mut creature = Creature::new(CreatureKind::DeceptiveDragon, Position::new(4, 4));
        creature.confuse(AnimalId(3));
        assert!(creature.spares(AnimalId(0)));

        creature.expire_effects(AnimalId(0));
        assert!(creature.is_confused());
        creature.expire_effects(AnimalId(3));
        assert!(!creature.is_confused());
    }

    #[test]
    fn test_shield_is_per_animal() {
        let mut creature = Creature::new(CreatureKind::PrecociousPhoenix, Position::new(4, 4));
        creature.shield(AnimalId(2));
        creature.shield(AnimalId(2));
        assert_eq!(creature.shielded.len(), 1);
        assert!(creature.spares(AnimalId(2)));
        assert!(!creature.spares(AnimalId(4)));
    }
}
