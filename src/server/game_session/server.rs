use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::game::{GameState, Outcome};
use crate::game::systems::render_board;
use crate::server::game_session::messages::{ClientAction, GetSnapshot, ProcessClientAction, ResetGame};

/// Owns the one running game. The actor mailbox serializes every request,
/// so the engine itself never locks.
pub struct GameSession {
    /// Identifies the current game in logs. Renewed on reset.
    pub game_id: Uuid,
    game_state: GameState,
}

impl GameSession {
    pub fn new(seed: u64) -> Self {
        Self {
            game_id: Uuid::new_v4(),
            game_state: GameState::new(seed),
        }
    }

    fn log_board(&self) {
        debug!(
            "[GameSession] Board: game_id={}\n{}",
            self.game_id,
            render_board(&self.game_state)
        );
    }

    pub fn reset(&mut self) {
        self.game_id = Uuid::new_v4();
        let seed = self.game_state.seed;
        self.game_state.reset(seed);
        info!("[GameSession] Game reset: game_id={} seed={}", self.game_id, seed);
        self.log_board();
    }

    pub fn process(&mut self, action: &ClientAction) -> Outcome {
        let outcome = match action {
            ClientAction::Move { animal, to_square } => {
                self.game_state.apply_move(animal, to_square.row, to_square.col)
            }
            ClientAction::Spell { animal, spell } => self.game_state.apply_spell(animal, spell),
        };

        if outcome.accepted {
            debug!(
                "[GameSession] Accepted {:?}: game_id={} status={:?}",
                action, self.game_id, outcome.status
            );
        } else {
            warn!(
                "[GameSession] Rejected {:?} from {}: game_id={} status={:?}",
                action,
                action.animal(),
                self.game_id,
                outcome.status
            );
        }
        if self.game_state.game_over {
            info!("[GameSession] Game over: game_id={} {}", self.game_id, self.game_state.status);
        }
        outcome
    }
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("[GameSession] Game created: game_id={} seed={}", self.game_id, self.game_state.seed);
        self.log_board();
    }
}

impl Handler<ProcessClientAction> for GameSession {
    type Result = MessageResult<ProcessClientAction>;

    fn handle(&mut self, msg: ProcessClientAction, _: &mut Context<Self>) -> Self::Result {
        self.process(&msg.action);
        MessageResult(self.game_state.snapshot())
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, msg: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        if msg.reveal_all {
            MessageResult(self.game_state.debug_snapshot())
        } else {
            MessageResult(self.game_state.snapshot())
        }
    }
}

impl Handler<ResetGame> for GameSession {
    type Result = MessageResult<ResetGame>;

    fn handle(&mut self, _: ResetGame, _: &mut Context<Self>) -> Self::Result {
        self.reset();
        MessageResult(self.game_state.snapshot())
    }
}
