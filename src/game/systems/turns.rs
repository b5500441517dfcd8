//! Turn advancement rules.

use crate::game::state::GameState;
use crate::game::types::AnimalId;

/// Per-round bookkeeping consulted when the turn passes on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnFlags {
    pub current_used_spell: bool,
    pub next_used_spell: bool,
    /// Set by a move that ended on a creature's square.
    pub next_turn: bool,
}

/// Roster index of the animal that acts after `current`.
///
/// Precedence: a candidate sharing the current animal's name is kept; then the
/// next-turn flag skips one slot; then a spell from the current animal keeps the
/// candidate; then a spell already cast by the next animal skips one slot.
pub fn next_index(names: &[&str], current: usize, flags: &TurnFlags) -> usize {
    let count = names.len();
    let candidate = (current + 1) % count;

    if names[candidate] == names[current] {
        candidate
    } else if flags.next_turn {
        (candidate + 1) % count
    } else if flags.current_used_spell {
        candidate
    } else if flags.next_used_spell {
        (candidate + 1) % count
    } else {
        candidate
    }
}

/// Start `animal`'s turn: the effects it put on creatures age by one turn.
pub fn begin_turn(game_state: &mut GameState, animal: AnimalId) {
    for creature in &mut game_state.creatures {
        creature.expire_effects(animal);
    }
    game_state.animals[animal.0].shielded = false;
}
