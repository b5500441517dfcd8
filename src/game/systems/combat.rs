//! Creature attack resolution.

use crate::game::state::GameState;
use crate::game::types::{AnimalId, CreatureId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The animal is not standing on a creature.
    NoCreature,
    /// Charm, confusion or shield held the creature back.
    Spared(CreatureId),
    Hit { creature: CreatureId, damage: i32 },
    Killed { creature: CreatureId, damage: i32 },
}

/// Let the creature under `animal` (if any) attack it.
pub fn resolve_attack(game_state: &mut GameState, animal: AnimalId) -> AttackOutcome {
    let pos = game_state.animals[animal.0].pos;
    let Some(creature_id) = game_state.board.square(pos).creature else {
        return AttackOutcome::NoCreature;
    };
    let creature = &game_state.creatures[creature_id.0];
    if creature.spares(animal) {
        return AttackOutcome::Spared(creature_id);
    }

    let damage = creature.attack;
    let target = &mut game_state.animals[animal.0];
    target.attacked(damage);
    if target.is_alive() {
        AttackOutcome::Hit { creature: creature_id, damage }
    } else {
        AttackOutcome::Killed { creature: creature_id, damage }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::CreatureKind;
    use crate::game::types::Position;

    #[test]
    fn test_no_creature_no_damage() {
        let mut game = GameState::blank();
        assert_eq!(resolve_attack(&mut game, AnimalId(0)), AttackOutcome::NoCreature);
        assert_eq!(game.animals[0].life, 100);
    }

    #[test]
    fn test_hit_reduces_life_by_attack_value() {
        let mut game = GameState::blank();
        let deer = AnimalId(2);
        let centaur = game.place_creature(CreatureKind::ComplicatedCentaur, Position::new(10, 10));
        game.relocate(deer, Position::new(10, 10));

        assert_eq!(
            resolve_attack(&mut game, deer),
            AttackOutcome::Hit { creature: centaur, damage: 36 }
        );
        assert_eq!(game.animals[deer.0].life, 64);
    }

    #[test]
    fn test_low_life_animal_is_killed() {
        let mut game = GameState::blank();
        let fox = AnimalId(1);
        let phoenix = game.place_creature(CreatureKind::PrecociousPhoenix, Position::new(10, 10));
        game.relocate(fox, Position::new(10, 10));
        game.animals[fox.0].life = 14;

        assert_eq!(
            resolve_attack(&mut game, fox),
            AttackOutcome::Killed { creature: phoenix, damage: 42 }
        );
        assert!(game.animals[fox.0].life <= 0);
    }

    #[test]
    fn test_protections_spare_the_animal() {
        let mut game = GameState::blank();
        let owl = AnimalId(3);
        let sphinx = game.place_creature(CreatureKind::SassySphinx, Position::new(10, 10));
        game.relocate(owl, Position::new(10, 10));

        game.creatures[sphinx.0].charm(owl);
        assert_eq!(resolve_attack(&mut game, owl), AttackOutcome::Spared(sphinx));
        game.creatures[sphinx.0].charmed_by.clear();

        game.creatures[sphinx.0].confuse(AnimalId(0));
        assert_eq!(resolve_attack(&mut game, owl), AttackOutcome::Spared(sphinx));
        game.creatures[sphinx.0].confused_by = None;

        game.creatures[sphinx.0].shield(owl);
        assert_eq!(resolve_attack(&mut game, owl), AttackOutcome::Spared(sphinx));
        assert_eq!(game.animals[owl.0].life, 100);
    }
}
