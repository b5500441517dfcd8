//! Error types for the game engine.
//!
//! Every variant's `Display` text is the status message shown to players,
//! the attached reason is only used for logging.

use thiserror::Error;

/// Why a move request was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    NotYourTurn,
    WrongPhase,
    OffBoard,
    Occupied,
    IllegalShape,
    BlockedPath,
}

/// Why a spell request was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellRejection {
    NotYourTurn,
    WrongPhase,
    NoCharge,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("The last move was invalid.")]
    InvalidMove(MoveRejection),

    #[error("The last spell was invalid.")]
    InvalidSpell(SpellRejection),

    #[error("The last move was invalid.")]
    UnknownAnimal(String),

    #[error("The game is over.")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, GameError>;
