use actix::prelude::*;
use serde::{Serialize, Deserialize};

use crate::game::Snapshot;

/// Target square of a move request. Signed so that negative coordinates
/// reach the engine and are rejected there as an invalid move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareRef {
    pub row: i64,
    pub col: i64,
}

/// Body of `POST /game`, tagged by its `action` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ClientAction {
    Move {
        animal: String,
        #[serde(rename = "toSquare")]
        to_square: SquareRef,
    },
    Spell {
        animal: String,
        spell: String,
    },
}

impl ClientAction {
    pub fn animal(&self) -> &str {
        match self {
            ClientAction::Move { animal, .. } | ClientAction::Spell { animal, .. } => animal,
        }
    }
}

/// Apply a client action and answer with the resulting public snapshot.
#[derive(Message)]
#[rtype(result = "Snapshot")]
pub struct ProcessClientAction {
    pub action: ClientAction,
}

#[derive(Message)]
#[rtype(result = "Snapshot")]
pub struct GetSnapshot {
    /// Show hidden squares too.
    pub reveal_all: bool,
}

/// Rebuild the game from the session's seed.
#[derive(Message)]
#[rtype(result = "Snapshot")]
pub struct ResetGame;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_action() {
        let action: ClientAction = serde_json::from_str(
            r#"{"action":"move","animal":"Fox","toSquare":{"row":16,"col":-2}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            ClientAction::Move {
                animal: "Fox".to_string(),
                to_square: SquareRef { row: 16, col: -2 },
            }
        );
        assert_eq!(action.animal(), "Fox");
    }

    #[test]
    fn test_parse_spell_action() {
        let action: ClientAction =
            serde_json::from_str(r#"{"action":"spell","animal":"Owl","spell":"Heal"}"#).unwrap();
        assert_eq!(
            action,
            ClientAction::Spell { animal: "Owl".to_string(), spell: "Heal".to_string() }
        );
    }

    #[test]
    fn test_reject_incomplete_actions() {
        assert!(serde_json::from_str::<ClientAction>(r#"{"action":"move","animal":"Fox"}"#).is_err());
        assert!(serde_json::from_str::<ClientAction>(r#"{"action":"fly","animal":"Owl"}"#).is_err());
        assert!(serde_json::from_str::<ClientAction>(r#"{"animal":"Owl","spell":"Heal"}"#).is_err());
    }
}
