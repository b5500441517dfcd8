//! Text rendering of the board, used for debug logging.

use crate::game::state::GameState;

/// Render every square, hidden or not, as a fixed-width text grid.
///
/// Animals show their first two letters, creatures their short code,
/// spell pickups `**`, empty squares `..`.
pub fn render_board(game_state: &GameState) -> String {
    let mut out = String::new();
    for row in game_state.board.rows() {
        for square in row {
            let symbol: String = if let Some(animal) = square.animal {
                game_state.animals[animal.0].name.chars().take(2).collect()
            } else if let Some(creature) = square.creature {
                game_state.creatures[creature.0].kind.short_name().to_string()
            } else if square.has_spell() {
                "**".to_string()
            } else {
                "..".to_string()
            };
            out.push_str(&format!("{:<3}", symbol));
        }
        out.push('\n');
    }
    out
}
