//! The conversation state machine.

mod context;
mod error;
mod general;
mod input;
mod rock_paper_scissors;
mod state;
mod tic_tac_toe;

pub use context::ChatContext;
pub use error::StateError;
pub use general::{GeneralState, ROCK_PAPER_SCISSORS, TIC_TAC_TOE};
pub use input::{ExpectedInput, Reply};
pub use rock_paper_scissors::{PLAY_AGAIN, RockPaperScissorsState, STOP_PLAYING};
pub use state::{BotState, Turn};
pub use tic_tac_toe::{CONFIRM, TicTacToeState};
