//! Game selection and the shared invalid-input state.

use super::context::ChatContext;
use super::error::StateError;
use super::input::ExpectedInput;
use super::rock_paper_scissors::RockPaperScissorsState;
use super::state::{BotState, Turn};
use super::tic_tac_toe::TicTacToeState;
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Button that starts rock-paper-scissors.
pub const ROCK_PAPER_SCISSORS: &str = "Rock-paper-scissors";
/// Button that starts tic-tac-toe.
pub const TIC_TAC_TOE: &str = "Tic-tac-toe";

const GREETING: &str = "Hi! I'm Lowdie, but you can call me Lodi. I'm pretty sure we're gonna have fun! So, what we're gonna play?";

/// States outside any game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum GeneralState {
    /// Greets the user and offers the games.
    StartConversation,
    /// Offers the games again after one ends.
    ResumeConversation,
    /// Rejects a choice; the next answer goes back to the rejecting state.
    Invalid,
}

impl GeneralState {
    pub(super) fn emit(self, out: &mut Vec<String>) -> Result<(), StateError> {
        out.push(
            match self {
                GeneralState::StartConversation => GREETING,
                GeneralState::ResumeConversation => "What we're gonna play now?",
                GeneralState::Invalid => "Hey, that's invalid!",
            }
            .to_string(),
        );
        Ok(())
    }

    pub(super) fn question(self, _ctx: &ChatContext) -> ExpectedInput {
        match self {
            GeneralState::StartConversation | GeneralState::ResumeConversation => {
                ExpectedInput::choice(&[ROCK_PAPER_SCISSORS, TIC_TAC_TOE])
            }
            GeneralState::Invalid => ExpectedInput::None,
        }
    }

    pub(super) fn answer<R: RandomSource>(
        self,
        ctx: &mut ChatContext,
        label: &str,
        turn: &mut Turn<'_, R>,
    ) -> Option<BotState> {
        match self {
            GeneralState::StartConversation | GeneralState::ResumeConversation => {
                Some(match label {
                    TIC_TAC_TOE => {
                        info!("Starting tic-tac-toe");
                        TicTacToeState::SetupSettings.into()
                    }
                    ROCK_PAPER_SCISSORS => {
                        info!("Starting rock-paper-scissors");
                        RockPaperScissorsState::UserMove.into()
                    }
                    _ => {
                        warn!(label, "Unknown game");
                        BotState::INVALID
                    }
                })
            }
            GeneralState::Invalid => {
                let previous = *ctx.key();
                if previous == BotState::INVALID {
                    error!("Invalid state stored as conversation key");
                    return None;
                }
                previous.on_user_answer(ctx, label, turn)
            }
        }
    }
}
