// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the HTTP side of the game:
//! - Application state (address of the game session actor)
//! - HTTP routing and CORS headers
//! - Game session orchestration (the single seeded game, client actions)
//! - JSON error bodies

pub mod state;
pub mod router;
pub mod game_session;
pub mod http_error;
