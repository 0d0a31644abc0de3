//! Per-conversation data for whichever game is running.

use crate::games::rock_paper_scissors::Hand;
use crate::games::tictactoe::{Board, BoardDifficulty, Piece};
use derive_more::From;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who places the first piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartMove {
    /// The player starts.
    #[default]
    You,
    /// The bot starts.
    I,
}

impl StartMove {
    /// Label shown in the settings summary, from the bot's point of view.
    pub fn label(self) -> &'static str {
        match self {
            StartMove::You => "You",
            StartMove::I => "I",
        }
    }

    /// Decodes a `/startmove` argument, which names the starter from the
    /// player's point of view: `you` means the bot, `me` the player.
    #[instrument]
    pub fn decode_command(arg: &str) -> Option<Self> {
        match arg.to_lowercase().as_str() {
            "you" => Some(StartMove::I),
            "me" => Some(StartMove::You),
            _ => None,
        }
    }

    /// The player's piece: `X` moves first, so the player holds `O` when
    /// the bot starts.
    pub fn player_piece(self) -> Piece {
        match self {
            StartMove::I => Piece::O,
            StartMove::You => Piece::X,
        }
    }
}

/// Tic-tac-toe configuration before the board exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSetup {
    /// Who starts.
    pub start_move: StartMove,
    /// Difficulty label as entered, decoded on commit.
    pub difficulty_label: String,
}

impl Default for TicTacToeSetup {
    fn default() -> Self {
        Self {
            start_move: StartMove::You,
            difficulty_label: BoardDifficulty::Normal.label().to_string(),
        }
    }
}

/// A committed tic-tac-toe game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeGame {
    /// Computer strategy.
    pub difficulty: BoardDifficulty,
    /// The player's piece.
    pub piece: Piece,
    /// Allocated when play begins.
    pub board: Option<Board>,
}

/// One rock-paper-scissors round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RockPaperScissorsRound {
    /// The player's hand, once chosen.
    pub player_hand: Option<Hand>,
}

/// Game data attached to a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, From)]
pub enum GameState {
    /// Tic-tac-toe settings being edited.
    TicTacToeSetup(TicTacToeSetup),
    /// Tic-tac-toe being played.
    TicTacToe(TicTacToeGame),
    /// A rock-paper-scissors round.
    RockPaperScissors(RockPaperScissorsRound),
}

impl GameState {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            GameState::TicTacToeSetup(_) => "tic-tac-toe setup",
            GameState::TicTacToe(_) => "tic-tac-toe",
            GameState::RockPaperScissors(_) => "rock-paper-scissors",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_defaults() {
        let setup = TicTacToeSetup::default();
        assert_eq!(setup.start_move, StartMove::You);
        assert_eq!(setup.difficulty_label, "normal");
    }

    #[test]
    fn test_startmove_command_is_from_player_view() {
        assert_eq!(StartMove::decode_command("you"), Some(StartMove::I));
        assert_eq!(StartMove::decode_command("ME"), Some(StartMove::You));
        assert_eq!(StartMove::decode_command("them"), None);
    }

    #[test]
    fn test_player_piece() {
        assert_eq!(StartMove::I.player_piece(), Piece::O);
        assert_eq!(StartMove::You.player_piece(), Piece::X);
    }
}
