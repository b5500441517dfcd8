use crate::config::game::{BOARD_ROWS, BOARD_COLS};
use crate::game::entities::Spell;
use crate::game::types::{AnimalId, CreatureId, Position};

/// A single board cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Square {
    pub visible: bool,
    pub animal: Option<AnimalId>,
    pub creature: Option<CreatureId>,
    pub spell: Option<Spell>,
}

impl Square {
    pub fn has_animal(&self) -> bool {
        self.animal.is_some()
    }

    pub fn has_creature(&self) -> bool {
        self.creature.is_some()
    }

    pub fn has_spell(&self) -> bool {
        self.spell.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: Vec<Vec<Square>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty, fully hidden board.
    pub fn new() -> Self {
        Self {
            squares: vec![vec![Square::default(); BOARD_COLS]; BOARD_ROWS],
        }
    }

    /// Panics when `pos` is off the board: callers validate request coordinates first.
    pub fn square(&self, pos: Position) -> &Square {
        &self.squares[pos.row][pos.col]
    }

    fn square_mut(&mut self, pos: Position) -> &mut Square {
        &mut self.squares[pos.row][pos.col]
    }

    pub fn has_animal(&self, pos: Position) -> bool {
        self.square(pos).has_animal()
    }

    pub fn has_creature(&self, pos: Position) -> bool {
        self.square(pos).has_creature()
    }

    pub fn has_spell(&self, pos: Position) -> bool {
        self.square(pos).has_spell()
    }

    pub fn reveal(&mut self, pos: Position) {
        self.square_mut(pos).visible = true;
    }

    /// Place an animal for the first time.
    pub fn place_animal(&mut self, id: AnimalId, pos: Position) {
        debug_assert!(!self.has_animal(pos), "square {pos:?} already holds an animal");
        self.square_mut(pos).animal = Some(id);
    }

    /// Relocate an animal, clearing its previous square before occupying the new one.
    pub fn move_animal(&mut self, id: AnimalId, from: Position, to: Position) {
        let old = self.square_mut(from);
        if old.animal == Some(id) {
            old.animal = None;
        }
        self.place_animal(id, to);
    }

    pub fn place_creature(&mut self, id: CreatureId, pos: Position) {
        self.square_mut(pos).creature = Some(id);
    }

    pub fn place_spell(&mut self, spell: Spell, pos: Position) {
        self.square_mut(pos).spell = Some(spell);
    }

    /// Remove and return the spell pickup lying on `pos`, if any.
    pub fn take_spell(&mut self, pos: Position) -> Option<Spell> {
        self.square_mut(pos).spell.take()
    }

    /// Iterate rows of squares, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.iter().map(Vec::as_slice)
    }

    /// The 3×3 block centred on `center`, clipped to the board, centre included.
    pub fn neighbourhood(center: Position) -> impl Iterator<Item = Position> {
        let rows = center.row.saturating_sub(1)..=(center.row + 1).min(BOARD_ROWS - 1);
        rows.flat_map(move |row| {
            let cols = center.col.saturating_sub(1)..=(center.col + 1).min(BOARD_COLS - 1);
            cols.map(move |col| Position::new(row, col))
        })
    }
}

/// Squares strictly between `from` and `to`, walked outward from `from`.
///
/// Only straight and exact-diagonal lines have intermediate squares; any other
/// pair of positions yields an empty path.
pub fn line_between(from: Position, to: Position) -> Vec<Position> {
    let (rows, cols) = (from.row_diff(to), from.col_diff(to));
    if rows != 0 && cols != 0 && rows != cols {
        return Vec::new();
    }
    let steps = rows.max(cols);
    let row_step = (to.row as isize - from.row as isize).signum();
    let col_step = (to.col as isize - from.col as isize).signum();

    (1..steps)
        .map(|i| {
            let i = i as isize;
            Position::new(
                (from.row as isize + row_step * i) as usize,
                (from.col as isize + col_step * i) as usize,
            )
        })
        .collect()
}
