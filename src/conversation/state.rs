//! The dialogue graph.
//!
//! A [`BotState`] is a plain tag. All per-conversation data lives in
//! [`ChatContext`], so one tag value serves every conversation. Each tag
//! offers three operations:
//!
//! - [`BotState::texts`]: apply the state's entry effects to the context,
//!   then return the lines to send.
//! - [`BotState::on_user_question`]: what input to offer next (pure).
//! - [`BotState::on_user_answer`]: the transition function.
//!
//! Many states forward one or more of these to a sibling, which is how
//! game-over states reuse the board render and the replay prompt.

use super::context::ChatContext;
use super::error::StateError;
use super::general::GeneralState;
use super::input::ExpectedInput;
use super::rock_paper_scissors::RockPaperScissorsState;
use super::tic_tac_toe::TicTacToeState;
use crate::games::tictactoe::{Board, BoardEncoding};
use crate::random::RandomSource;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A named point in the conversation, grouped by family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
pub enum BotState {
    /// Game selection and invalid input.
    General(GeneralState),
    /// Rock-paper-scissors rounds.
    RockPaperScissors(RockPaperScissorsState),
    /// Tic-tac-toe setup and play.
    TicTacToe(TicTacToeState),
}

impl BotState {
    /// Where every new conversation begins.
    pub const START_CONVERSATION: BotState = BotState::General(GeneralState::StartConversation);
    /// Back to game selection after a game.
    pub const RESUME_CONVERSATION: BotState = BotState::General(GeneralState::ResumeConversation);
    /// Shared rejection state; never stored as a conversation's key.
    pub const INVALID: BotState = BotState::General(GeneralState::Invalid);

    /// Applies entry effects and returns the lines to send, in order.
    #[instrument(skip(ctx, turn), fields(state = %self))]
    pub fn texts<R: RandomSource>(
        self,
        ctx: &mut ChatContext,
        turn: &mut Turn<'_, R>,
    ) -> Result<Vec<String>, StateError> {
        let mut out = Vec::new();
        self.emit(ctx, turn, &mut out)?;
        Ok(out)
    }

    /// Returns the input descriptor to attach to the last line.
    #[instrument(skip(ctx), fields(state = %self))]
    pub fn on_user_question(self, ctx: &ChatContext) -> ExpectedInput {
        match self {
            BotState::General(state) => state.question(ctx),
            BotState::RockPaperScissors(state) => state.question(ctx),
            BotState::TicTacToe(state) => state.question(ctx),
        }
    }

    /// Consumes the user's text and picks the next state.
    ///
    /// `None` means the turn cannot continue because the context is
    /// inconsistent; the fault has already been logged.
    #[instrument(skip(ctx, turn), fields(state = %self))]
    pub fn on_user_answer<R: RandomSource>(
        self,
        ctx: &mut ChatContext,
        label: &str,
        turn: &mut Turn<'_, R>,
    ) -> Option<BotState> {
        match self {
            BotState::General(state) => state.answer(ctx, label, turn),
            BotState::RockPaperScissors(state) => state.answer(ctx, label, turn),
            BotState::TicTacToe(state) => state.answer(ctx, label, turn),
        }
    }

    pub(super) fn emit<R: RandomSource>(
        self,
        ctx: &mut ChatContext,
        turn: &mut Turn<'_, R>,
        out: &mut Vec<String>,
    ) -> Result<(), StateError> {
        match self {
            BotState::General(state) => state.emit(out),
            BotState::RockPaperScissors(state) => state.emit(ctx, turn, out),
            BotState::TicTacToe(state) => state.emit(ctx, turn, out),
        }
    }
}

/// Engine resources a state may touch during one turn.
pub struct Turn<'a, R> {
    rng: &'a mut R,
    encoding: BoardEncoding,
    code_fence: bool,
}

impl<'a, R: RandomSource> Turn<'a, R> {
    /// Borrows the engine's random source for one turn.
    pub fn new(rng: &'a mut R, encoding: BoardEncoding, code_fence: bool) -> Self {
        Self {
            rng,
            encoding,
            code_fence,
        }
    }

    /// The random source.
    pub fn rng(&mut self) -> &mut R {
        self.rng
    }

    /// Renders a board the way conversation output shows it.
    pub fn render(&self, board: &Board) -> String {
        let text = board.encode(self.encoding);
        if self.code_fence {
            format!("```\n{text}```")
        } else {
            text
        }
    }
}

/// Logs an internal fault raised while choosing a transition.
pub(super) fn fault<T>(result: Result<T, StateError>) -> Option<T> {
    result
        .inspect_err(|e| tracing::error!(error = %e, "Inconsistent conversation context"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::BoardDifficulty;
    use crate::random::ScriptedRng;

    #[test]
    fn test_display_names_leaf_state() {
        assert_eq!(BotState::START_CONVERSATION.to_string(), "StartConversation");
        assert_eq!(
            BotState::from(TicTacToeState::GameOnProgress).to_string(),
            "GameOnProgress"
        );
    }

    #[test]
    fn test_render_wraps_in_fence() {
        let mut rng = ScriptedRng::new(vec![]);
        let board = Board::empty(BoardDifficulty::Easy);
        let fenced = Turn::new(&mut rng, BoardEncoding::Ascii, true).render(&board);
        assert!(fenced.starts_with("```\n| A |"));
        assert!(fenced.ends_with("+---+---+---+```"));

        let mut rng = ScriptedRng::new(vec![]);
        let plain = Turn::new(&mut rng, BoardEncoding::Ascii, false).render(&board);
        assert_eq!(plain, board.encode(BoardEncoding::Ascii));
    }

    fn all_states() -> Vec<BotState> {
        use strum::IntoEnumIterator;
        GeneralState::iter()
            .map(BotState::from)
            .chain(RockPaperScissorsState::iter().map(BotState::from))
            .chain(TicTacToeState::iter().map(BotState::from))
            .collect()
    }

    #[test]
    fn test_missing_game_data_is_a_state_error() {
        for state in all_states() {
            let mut ctx = ChatContext::new();
            let mut rng = ScriptedRng::new(vec![]);
            let mut turn = Turn::new(&mut rng, BoardEncoding::Ascii, true);
            match state.texts(&mut ctx, &mut turn) {
                Ok(lines) => assert!(
                    lines.iter().all(|l| !l.is_empty()),
                    "{state} produced an empty line"
                ),
                Err(e) => assert!(!e.message.is_empty(), "{state} failed silently"),
            }
        }
    }

    #[test]
    fn test_stored_invalid_key_ends_turn() {
        let mut ctx = ChatContext::new();
        ctx.set_key(BotState::INVALID);
        let mut rng = ScriptedRng::new(vec![]);
        let mut turn = Turn::new(&mut rng, BoardEncoding::Ascii, true);
        assert_eq!(BotState::INVALID.on_user_answer(&mut ctx, "hi", &mut turn), None);
    }

    #[test]
    fn test_play_without_board_ends_turn() {
        let mut ctx = ChatContext::new();
        let mut rng = ScriptedRng::new(vec![]);
        let mut turn = Turn::new(&mut rng, BoardEncoding::Ascii, true);
        let state = BotState::from(TicTacToeState::GameOnProgress);
        assert_eq!(state.on_user_answer(&mut ctx, "A1", &mut turn), None);
    }
}
