//! Tic-tac-toe setup, play and wrap-up.
//!
//! Setup edits a [`TicTacToeSetup`] through slash commands until the user
//! confirms with `OK`. Play alternates one player placement with one
//! computer placement per turn. Bad positions go to one of three
//! corrective states, which hand the next answer back to
//! [`TicTacToeState::GameOnProgress`] so nothing is lost.

use super::context::ChatContext;
use super::error::StateError;
use super::input::ExpectedInput;
use super::rock_paper_scissors::{PLAY_AGAIN, STOP_PLAYING};
use super::state::{BotState, Turn, fault};
use crate::game_state::{StartMove, TicTacToeGame, TicTacToeSetup};
use crate::games::tictactoe::{Board, BoardDifficulty};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Word that commits the settings (any case).
pub const CONFIRM: &str = "OK";

const PIECE_COMMAND: &str = "piece";
const START_MOVE_COMMAND: &str = "startmove";
const DIFFICULTY_COMMAND: &str = "difficulty";

/// States of a tic-tac-toe game, from setup to replay prompt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum TicTacToeState {
    /// Resets the settings to defaults, then shows them.
    SetupSettings,
    /// Shows the settings and accepts commands.
    Settings,
    /// Allocates the board.
    GameStarted,
    /// Allocates the board and lets the computer open.
    BotGameStarted,
    /// Allocates the board; the player opens.
    PlayerGameStarted,
    /// Shows the board and takes the player's position.
    GameOnProgress,
    /// The position was already taken.
    IncorrectInputPosition,
    /// The position is off the board.
    OutOfBoundsInputPosition,
    /// The text is not a position.
    InvalidInputPosition,
    /// Nobody won.
    Tie,
    /// The computer won.
    BotWin,
    /// The player won.
    PlayerWin,
    /// Offers another game.
    PostGame,
    /// Shows the final board and drops the game.
    EndOfGame,
}

impl TicTacToeState {
    pub(super) fn emit<R: RandomSource>(
        self,
        ctx: &mut ChatContext,
        turn: &mut Turn<'_, R>,
        out: &mut Vec<String>,
    ) -> Result<(), StateError> {
        use TicTacToeState::*;
        match self {
            SetupSettings => {
                out.push("Let's set things up.".to_string());
                ctx.set_game(TicTacToeSetup::default());
                Settings.emit(ctx, turn, out)?;
            }
            Settings => {
                let setup = ctx.setup_mut()?;
                out.push(
                    [
                        format!(
                            "- {} will start playing. (send `/startmove [you|me]` to change).",
                            setup.start_move.label()
                        ),
                        format!(
                            "- My difficulty is {}. (send `/difficulty [easy|normal|hard]` to change).",
                            setup.difficulty_label
                        ),
                        String::new(),
                        "If everything is OK, just send OK.".to_string(),
                    ]
                    .join("\n"),
                );
            }
            GameStarted => {
                let game = ctx.tic_tac_toe_mut()?;
                info!(difficulty = %game.difficulty, piece = %game.piece, "Board allocated");
                game.board = Some(Board::empty(game.difficulty));
            }
            BotGameStarted => {
                GameStarted.emit(ctx, turn, out)?;
                let game = ctx.tic_tac_toe_mut()?;
                let bot_piece = game.piece.opponent();
                let board = board_mut(game)?;
                board.insert_random(bot_piece, turn.rng());
                GameOnProgress.emit(ctx, turn, out)?;
            }
            PlayerGameStarted => {
                GameStarted.emit(ctx, turn, out)?;
                GameOnProgress.emit(ctx, turn, out)?;
            }
            GameOnProgress => {
                let board = board_mut(ctx.tic_tac_toe_mut()?)?;
                out.push(turn.render(board));
                out.push("Your turn.".to_string());
            }
            IncorrectInputPosition => {
                out.push("You can't put it there, it's already occupied!".to_string());
            }
            OutOfBoundsInputPosition => out.push("Hey, this doesn't even exist!".to_string()),
            InvalidInputPosition => out.push(
                "Hmmm, I can't understand your position. If you say something like A1 or B2, I can definitely understand you. Shall we try?"
                    .to_string(),
            ),
            Tie | BotWin | PlayerWin => {
                EndOfGame.emit(ctx, turn, out)?;
                out.push(
                    match self {
                        Tie => "Hey, it's a tie!",
                        BotWin => "Hey, I won!",
                        _ => "Hey, you won!",
                    }
                    .to_string(),
                );
                PostGame.emit(ctx, turn, out)?;
            }
            PostGame => out.push("Wanna play again?".to_string()),
            EndOfGame => {
                let board = board_mut(ctx.tic_tac_toe_mut()?)?;
                out.push(turn.render(board));
                ctx.clear_game();
            }
        }
        Ok(())
    }

    pub(super) fn question(self, _ctx: &ChatContext) -> ExpectedInput {
        match self {
            TicTacToeState::Tie
            | TicTacToeState::BotWin
            | TicTacToeState::PlayerWin
            | TicTacToeState::PostGame => ExpectedInput::choice(&[PLAY_AGAIN, STOP_PLAYING]),
            _ => ExpectedInput::None,
        }
    }

    pub(super) fn answer<R: RandomSource>(
        self,
        ctx: &mut ChatContext,
        label: &str,
        turn: &mut Turn<'_, R>,
    ) -> Option<BotState> {
        use TicTacToeState::*;
        match self {
            SetupSettings => Settings.answer(ctx, label, turn),
            Settings => settings_answer(ctx, label),
            GameStarted
            | IncorrectInputPosition
            | OutOfBoundsInputPosition
            | InvalidInputPosition => GameOnProgress.answer(ctx, label, turn),
            BotGameStarted | PlayerGameStarted => GameStarted.answer(ctx, label, turn),
            GameOnProgress => play_answer(ctx, label, turn),
            Tie | BotWin | PlayerWin | EndOfGame => PostGame.answer(ctx, label, turn),
            PostGame => Some(match label {
                PLAY_AGAIN => SetupSettings.into(),
                STOP_PLAYING => BotState::RESUME_CONVERSATION,
                _ => {
                    warn!(label, "Unknown post-game choice");
                    BotState::INVALID
                }
            }),
        }
    }
}

#[track_caller]
fn board_mut(game: &mut TicTacToeGame) -> Result<&mut Board, StateError> {
    game.board
        .as_mut()
        .ok_or_else(|| StateError::new("tic-tac-toe game has no board"))
}

#[instrument(skip(ctx))]
fn settings_answer(ctx: &mut ChatContext, label: &str) -> Option<BotState> {
    let setup = fault(ctx.setup_mut())?;

    let Some((command, arg)) = parse_command(label) else {
        if !label.eq_ignore_ascii_case(CONFIRM) {
            warn!(label, "Not a settings command");
            return Some(BotState::INVALID);
        }
        let start_move = setup.start_move;
        let Some(difficulty) = BoardDifficulty::decode(&setup.difficulty_label) else {
            error!(label = %setup.difficulty_label, "Stored difficulty does not decode");
            return None;
        };
        let piece = start_move.player_piece();
        info!(?start_move, %difficulty, %piece, "Settings confirmed");
        ctx.set_game(TicTacToeGame {
            difficulty,
            piece,
            board: None,
        });
        return Some(match start_move {
            StartMove::I => TicTacToeState::BotGameStarted.into(),
            StartMove::You => TicTacToeState::PlayerGameStarted.into(),
        });
    };

    match command {
        START_MOVE_COMMAND => match StartMove::decode_command(arg) {
            Some(start_move) => setup.start_move = start_move,
            None => {
                warn!(arg, "Unknown starter");
                return Some(BotState::INVALID);
            }
        },
        DIFFICULTY_COMMAND => match BoardDifficulty::decode(arg) {
            Some(difficulty) => setup.difficulty_label = difficulty.label().to_string(),
            None => {
                warn!(arg, "Unknown difficulty");
                return Some(BotState::INVALID);
            }
        },
        _ => {
            warn!(command, arg, "Unsupported settings command");
            return Some(BotState::INVALID);
        }
    }
    debug!(?setup, "Settings updated");
    Some(TicTacToeState::Settings.into())
}

#[instrument(skip(ctx, turn))]
fn play_answer<R: RandomSource>(
    ctx: &mut ChatContext,
    label: &str,
    turn: &mut Turn<'_, R>,
) -> Option<BotState> {
    let game = fault(ctx.tic_tac_toe_mut())?;
    let piece = game.piece;
    let board = fault(board_mut(game))?;

    let Some((letter, digit)) = parse_position(label.trim()) else {
        warn!(label, "Unparseable position");
        return Some(TicTacToeState::InvalidInputPosition.into());
    };
    let row = letter.to_ascii_uppercase();
    if !('A'..='C').contains(&row) || !('1'..='3').contains(&digit) {
        warn!(%letter, %digit, "Position off the board");
        return Some(TicTacToeState::OutOfBoundsInputPosition.into());
    }
    let col = digit.to_digit(10).unwrap_or_default();
    if !board.insert_position(piece, row, col) {
        warn!(%row, col, "Position already occupied");
        return Some(TicTacToeState::IncorrectInputPosition.into());
    }
    debug!(%row, col, %piece, "Player placed");

    if board.is_solved() {
        info!("Player won");
        return Some(TicTacToeState::PlayerWin.into());
    }
    if !board.move_piece(piece.opponent(), turn.rng()) {
        info!("No cell left for the computer");
        return Some(TicTacToeState::Tie.into());
    }
    if board.is_solved() {
        info!("Computer won");
        return Some(TicTacToeState::BotWin.into());
    }
    if board.is_full() || board.empty_cells().is_empty() {
        info!("Board full");
        return Some(TicTacToeState::Tie.into());
    }
    Some(TicTacToeState::GameOnProgress.into())
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Finds the first word character immediately followed by a digit.
fn parse_position(text: &str) -> Option<(char, char)> {
    text.chars()
        .zip(text.chars().skip(1))
        .find(|&(letter, digit)| is_word(letter) && digit.is_ascii_digit())
}

/// Finds the first `/<command> <word>` in `text` naming a settings keyword.
///
/// `/piece` is recognized so that it shadows later commands, but it has no
/// handler.
fn parse_command(text: &str) -> Option<(&'static str, &str)> {
    text.match_indices('/').find_map(|(i, _)| {
        let rest = &text[i + 1..];
        [PIECE_COMMAND, START_MOVE_COMMAND, DIFFICULTY_COMMAND]
            .into_iter()
            .find_map(|command| {
                let arg = rest.strip_prefix(command)?.strip_prefix(' ')?;
                let end = arg.find(|c: char| !is_word(c)).unwrap_or(arg.len());
                (end > 0).then(|| (command, &arg[..end]))
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("A1"), Some(('A', '1')));
        assert_eq!(parse_position("b3"), Some(('b', '3')));
        assert_eq!(parse_position("put it on c2 please"), Some(('c', '2')));
        assert_eq!(parse_position("Z9"), Some(('Z', '9')));
        assert_eq!(parse_position("19"), Some(('1', '9')));
        assert_eq!(parse_position("A 1"), None);
        assert_eq!(parse_position("center"), None);
        assert_eq!(parse_position(""), None);
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("/startmove you"), Some(("startmove", "you")));
        assert_eq!(parse_command("/difficulty HARD"), Some(("difficulty", "HARD")));
        assert_eq!(parse_command("please /difficulty easy!"), Some(("difficulty", "easy")));
        assert_eq!(parse_command("/difficulty"), None);
        assert_eq!(parse_command("/Difficulty hard"), None);
        assert_eq!(parse_command("/piece x"), Some(("piece", "x")));
        assert_eq!(
            parse_command("/piece x /difficulty hard"),
            Some(("piece", "x"))
        );
        assert_eq!(
            parse_command("/colour red /difficulty hard"),
            Some(("difficulty", "hard"))
        );
        assert_eq!(parse_command("OK"), None);
    }

    #[test]
    fn test_piece_command_shadows_later_commands() {
        let mut ctx = ChatContext::new();
        ctx.set_game(TicTacToeSetup::default());
        assert_eq!(
            settings_answer(&mut ctx, "/piece x /difficulty hard"),
            Some(BotState::INVALID)
        );
        assert_eq!(ctx.setup_mut().unwrap().difficulty_label, "normal");

        assert_eq!(
            settings_answer(&mut ctx, "/difficulty hard"),
            Some(TicTacToeState::Settings.into())
        );
        assert_eq!(ctx.setup_mut().unwrap().difficulty_label, "hard");
    }
}
