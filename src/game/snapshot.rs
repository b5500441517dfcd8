//! Serializable projection of the game for clients.

use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};

use crate::game::entities::{Animal, Creature};
use crate::game::grid::Square;
use crate::game::state::GameState;
use crate::game::types::Phase;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Rows of squares; each square lists what stands on it, animal first.
    pub board: Vec<Vec<Vec<Occupant>>>,
    pub game_over: bool,
    pub current_animal_turn: String,
    pub next_animal_turn: String,
    pub status: String,
    pub current_animal_turn_type: Phase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Occupant {
    Animal(AnimalView),
    Creature(CreatureView),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalView {
    pub name: String,
    pub description: String,
    pub life: i32,
    pub spells: Vec<SpellView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellView {
    pub name: String,
    pub description: String,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureView {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub attack: i32,
    pub confused: bool,
    /// Charming animal name → turns left.
    pub charm: BTreeMap<String, u32>,
}

impl AnimalView {
    fn new(animal: &Animal) -> Self {
        Self {
            name: animal.name.clone(),
            description: animal.kind.description().to_string(),
            life: animal.life,
            spells: animal
                .spells
                .iter()
                .map(|(spell, amount)| SpellView {
                    name: spell.name().to_string(),
                    description: spell.description().to_string(),
                    amount: *amount,
                })
                .collect(),
        }
    }
}

impl CreatureView {
    fn new(creature: &Creature, animals: &[Animal]) -> Self {
        Self {
            name: creature.kind.name().to_string(),
            short_name: creature.kind.short_name().to_string(),
            description: creature.kind.description().to_string(),
            attack: creature.attack,
            confused: creature.is_confused(),
            charm: creature
                .charmed_by
                .iter()
                .map(|(animal, turns)| (animals[animal.0].name.clone(), *turns))
                .collect(),
        }
    }
}

/// Build a snapshot. Hidden squares come out empty unless `reveal_all` is set.
pub fn build_snapshot(game_state: &GameState, reveal_all: bool) -> Snapshot {
    let board = game_state
        .board
        .rows()
        .map(|row| {
            row.iter()
                .map(|square| occupants(game_state, square, reveal_all))
                .collect()
        })
        .collect();

    Snapshot {
        board,
        game_over: game_state.game_over,
        current_animal_turn: game_state.current_animal().name.clone(),
        next_animal_turn: game_state.next_animal().name.clone(),
        status: game_state.status.clone(),
        current_animal_turn_type: game_state.phase,
    }
}

fn occupants(game_state: &GameState, square: &Square, reveal_all: bool) -> Vec<Occupant> {
    let mut contents = Vec::new();
    if !square.visible && !reveal_all {
        return contents;
    }
    if let Some(animal) = square.animal {
        contents.push(Occupant::Animal(AnimalView::new(&game_state.animals[animal.0])));
    }
    if let Some(creature) = square.creature {
        contents.push(Occupant::Creature(CreatureView::new(
            &game_state.creatures[creature.0],
            &game_state.animals,
        )));
    }
    contents
}
