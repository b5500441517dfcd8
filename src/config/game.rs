/// Game configuration constants.
///
/// This module defines the board dimensions, the roster sizes and the
/// numeric rules (life, healing, charm duration) used by the engine.
pub const BOARD_ROWS: usize = 20;

/// Number of columns on the board.
pub const BOARD_COLS: usize = 20;

/// Row the animals start on.
pub const START_ROW: usize = BOARD_ROWS - 1;

/// Number of animals in the roster. The turn cursor wraps modulo this value.
pub const ANIMAL_COUNT: usize = 5;

/// Life points every animal starts with.
pub const STARTING_LIFE: i32 = 100;

/// Life points restored by a Heal spell. Healing is not capped.
pub const HEAL_AMOUNT: i32 = 10;

/// Number of the caster's turns a Charm lasts, counting the turn it is cast in.
pub const CHARM_TURNS: u32 = 3;

/// Number of spell pickups scattered on the board at game start.
pub const SPELL_PICKUPS: usize = 10;
