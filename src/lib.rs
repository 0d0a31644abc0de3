//! Lowdie - a chat bot that plays small games
//!
//! This library drives text conversations in which the bot greets the user,
//! offers a game, and plays it turn by turn. Transports (chat platforms, a
//! terminal) feed it one incoming text at a time and deliver its replies.
//!
//! # Architecture
//!
//! - **Engine**: [`Lowdie`] owns every conversation and runs one turn per message
//! - **Conversation**: [`BotState`] is the state machine behind each turn
//! - **Games**: rock-paper-scissors and tic-tac-toe rules, including the computer player
//! - **Random**: [`RandomSource`] abstracts randomness so games can be replayed
//!
//! # Example
//!
//! ```
//! use lowdie::{EngineConfig, Lowdie};
//!
//! let mut bot = Lowdie::new(EngineConfig::default().with_seed(7));
//! let greeting = bot.answer(1, "hi").unwrap();
//! assert!(greeting[0].text.starts_with("Hi! I'm Lowdie"));
//!
//! let replies = bot.answer(1, "Rock-paper-scissors").unwrap();
//! assert_eq!(replies.last().unwrap().text, "Select your move.");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod conversation;
mod engine;
mod game_state;
mod games;
mod random;
mod session;

// Crate-level exports - Engine
pub use engine::Lowdie;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Conversations
pub use conversation::{
    BotState, CONFIRM, ChatContext, ExpectedInput, GeneralState, PLAY_AGAIN, ROCK_PAPER_SCISSORS,
    Reply, RockPaperScissorsState, STOP_PLAYING, StateError, TIC_TAC_TOE, TicTacToeState, Turn,
};
pub use session::{ConversationId, ConversationTable};

// Crate-level exports - Per-conversation game data
pub use game_state::{
    GameState, RockPaperScissorsRound, StartMove, TicTacToeGame, TicTacToeSetup,
};

// Crate-level exports - Game rules
pub use games::rock_paper_scissors::{Hand, RoundOutcome};
pub use games::tictactoe::{Board, BoardDifficulty, BoardEncoding, Coord, LINES, Line, Piece};

// Crate-level exports - Randomness
pub use random::{GameRng, RandomSource, ScriptedRng};
