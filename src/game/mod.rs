//! Game engine root module.
//!
//! Board and entities, the movement/spell/combat/turn systems, and the
//! `GameState` that ties them into the move → spell → attack cycle.

pub mod types;
pub mod error;
pub mod state;
pub mod snapshot;

pub mod entities;
pub mod grid;
pub mod systems;


pub use state::GameState;
pub use snapshot::Snapshot;
pub use types::Outcome;
