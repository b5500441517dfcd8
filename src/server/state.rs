// src/server/state.rs

//! Application state for the server.
//!
//! Holds the address of the game session actor, shared by every HTTP handler.

use actix::Addr;
use crate::server::game_session::GameSession;

/// Shared application state, injected into HTTP handlers.
pub struct AppState {
    /// Address of the actor owning the game. All reads and writes go through its mailbox.
    pub game_session: Addr<GameSession>,
}

impl AppState {
    pub fn new(game_session: Addr<GameSession>) -> Self {
        AppState { game_session }
    }
}
