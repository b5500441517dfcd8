//! Spell casting system.
//!
//! Effects are targeted relative to the caster's square.

use crate::config::game::HEAL_AMOUNT;
use crate::game::entities::Spell;
use crate::game::error::{GameError, Result, SpellRejection};
use crate::game::grid::Board;
use crate::game::state::GameState;
use crate::game::types::{AnimalId, CreatureId, Position};

/// Spend one charge of `spell` held by `caster` and apply its effect.
pub fn cast_spell(game_state: &mut GameState, caster: AnimalId, spell: Spell) -> Result<()> {
    if !game_state.animals[caster.0].spend_spell(spell) {
        return Err(GameError::InvalidSpell(SpellRejection::NoCharge));
    }
    let center = game_state.animals[caster.0].pos;

    match spell {
        Spell::Shield => {
            if let Some(creature) = game_state.board.square(center).creature {
                game_state.creatures[creature.0].shield(caster);
            }
            game_state.animals[caster.0].shielded = true;
        }
        Spell::Charm => {
            for creature in diagonal_creatures(&game_state.board, center) {
                game_state.creatures[creature.0].charm(caster);
            }
        }
        Spell::Confuse => {
            for creature in diagonal_creatures(&game_state.board, center) {
                game_state.creatures[creature.0].confuse(caster);
            }
        }
        Spell::Detect => {
            for pos in Board::neighbourhood(center) {
                game_state.board.reveal(pos);
            }
        }
        Spell::Heal => game_state.animals[caster.0].heal(HEAL_AMOUNT),
    }
    Ok(())
}

/// Creatures on the squares diagonally adjacent to `center`.
/// Squares sharing the caster's row or column are never targeted.
fn diagonal_creatures(board: &Board, center: Position) -> Vec<CreatureId> {
    Board::neighbourhood(center)
        .filter(|pos| pos.row != center.row && pos.col != center.col)
        .filter_map(|pos| board.square(pos).creature)
        .collect()
}
