//! Mutable record kept for each conversation.

use super::error::StateError;
use super::state::BotState;
use crate::game_state::{GameState, RockPaperScissorsRound, TicTacToeGame, TicTacToeSetup};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Current dialogue state plus the active game's data.
///
/// `key` is the last state the conversation settled in. The shared invalid
/// state is never stored here, so a retry after invalid input resumes from
/// the state that rejected it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ChatContext {
    key: BotState,
    game: Option<GameState>,
}

impl Default for ChatContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatContext {
    /// A fresh context at the start of the conversation.
    #[instrument]
    pub fn new() -> Self {
        Self {
            key: BotState::START_CONVERSATION,
            game: None,
        }
    }

    /// Records the state the conversation settled in.
    #[instrument(skip(self), fields(from = %self.key))]
    pub fn set_key(&mut self, key: BotState) {
        self.key = key;
    }

    /// Attaches game data, replacing whatever was there.
    #[instrument(skip_all)]
    pub fn set_game(&mut self, game: impl Into<GameState>) {
        let game = game.into();
        match &self.game {
            Some(previous) => debug!(
                previous = previous.name(),
                next = game.name(),
                "Replacing game data"
            ),
            None => debug!(next = game.name(), "Attaching game data"),
        }
        self.game = Some(game);
    }

    /// Drops the game data.
    #[instrument(skip(self))]
    pub fn clear_game(&mut self) {
        self.game = None;
    }

    /// The tic-tac-toe settings being edited.
    #[track_caller]
    pub fn setup_mut(&mut self) -> Result<&mut TicTacToeSetup, StateError> {
        match &mut self.game {
            Some(GameState::TicTacToeSetup(setup)) => Ok(setup),
            other => Err(unexpected("tic-tac-toe setup", other.as_ref())),
        }
    }

    /// The running tic-tac-toe game.
    #[track_caller]
    pub fn tic_tac_toe_mut(&mut self) -> Result<&mut TicTacToeGame, StateError> {
        match &mut self.game {
            Some(GameState::TicTacToe(game)) => Ok(game),
            other => Err(unexpected("tic-tac-toe", other.as_ref())),
        }
    }

    /// The running rock-paper-scissors round.
    #[track_caller]
    pub fn rock_paper_scissors_mut(&mut self) -> Result<&mut RockPaperScissorsRound, StateError> {
        match &mut self.game {
            Some(GameState::RockPaperScissors(round)) => Ok(round),
            other => Err(unexpected("rock-paper-scissors", other.as_ref())),
        }
    }
}

#[track_caller]
fn unexpected(wanted: &str, found: Option<&GameState>) -> StateError {
    StateError::new(format!(
        "expected {wanted} data, found {}",
        found.map_or("none", GameState::name)
    ))
}
