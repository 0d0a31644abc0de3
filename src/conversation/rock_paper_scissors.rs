//! Rock-paper-scissors rounds.

use super::context::ChatContext;
use super::error::StateError;
use super::input::ExpectedInput;
use super::state::{BotState, Turn, fault};
use crate::game_state::RockPaperScissorsRound;
use crate::games::rock_paper_scissors::{Hand, RoundOutcome};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Button that starts another round or game.
pub const PLAY_AGAIN: &str = "Of course!";
/// Button that returns to game selection.
pub const STOP_PLAYING: &str = "No, thanks.";

/// States of one rock-paper-scissors round.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum RockPaperScissorsState {
    /// Asks for the player's hand.
    UserMove,
    /// Draws the bot's hand and announces the result.
    BotMove,
    /// Offers another round.
    PostGame,
}

impl RockPaperScissorsState {
    pub(super) fn emit<R: RandomSource>(
        self,
        ctx: &mut ChatContext,
        turn: &mut Turn<'_, R>,
        out: &mut Vec<String>,
    ) -> Result<(), StateError> {
        match self {
            RockPaperScissorsState::UserMove => {
                ctx.set_game(RockPaperScissorsRound::default());
                out.push("Select your move.".to_string());
            }
            RockPaperScissorsState::BotMove => {
                let player = ctx
                    .rock_paper_scissors_mut()?
                    .player_hand
                    .ok_or_else(|| StateError::new("round has no player hand"))?;
                let bot = Hand::random(turn.rng());
                let outcome = RoundOutcome::score(bot, player);
                info!(%player, %bot, ?outcome, "Round decided");
                out.push(match outcome {
                    RoundOutcome::Tie => format!("Since I would play {bot}, it's a tie!"),
                    RoundOutcome::BotWins => format!("Since I would play {bot}, I've won!"),
                    RoundOutcome::PlayerWins => format!("Since I would play {bot}, you've won!"),
                });
                ctx.clear_game();
                RockPaperScissorsState::PostGame.emit(ctx, turn, out)?;
            }
            RockPaperScissorsState::PostGame => out.push("Wanna play again?".to_string()),
        }
        Ok(())
    }

    pub(super) fn question(self, _ctx: &ChatContext) -> ExpectedInput {
        match self {
            RockPaperScissorsState::UserMove => {
                ExpectedInput::choice(&Hand::ALL.map(Hand::label))
            }
            RockPaperScissorsState::BotMove | RockPaperScissorsState::PostGame => {
                ExpectedInput::choice(&[PLAY_AGAIN, STOP_PLAYING])
            }
        }
    }

    pub(super) fn answer<R: RandomSource>(
        self,
        ctx: &mut ChatContext,
        label: &str,
        _turn: &mut Turn<'_, R>,
    ) -> Option<BotState> {
        match self {
            RockPaperScissorsState::UserMove => {
                let Some(hand) = Hand::decode(label) else {
                    warn!(label, "Unknown hand");
                    return Some(BotState::INVALID);
                };
                let round = fault(ctx.rock_paper_scissors_mut())?;
                debug!(%hand, "Player chose");
                round.player_hand = Some(hand);
                Some(RockPaperScissorsState::BotMove.into())
            }
            RockPaperScissorsState::BotMove | RockPaperScissorsState::PostGame => {
                Some(match label {
                    PLAY_AGAIN => RockPaperScissorsState::UserMove.into(),
                    STOP_PLAYING => BotState::RESUME_CONVERSATION,
                    _ => {
                        warn!(label, "Unknown post-game choice");
                        BotState::INVALID
                    }
                })
            }
        }
    }
}
