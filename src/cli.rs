//! Command-line interface for the lowdie console.

use clap::Parser;
use lowdie::{BoardEncoding, ConversationId};
use std::path::PathBuf;

/// Lowdie - chat with the game bot from a terminal
#[derive(Parser, Debug)]
#[command(name = "lowdie")]
#[command(about = "Play rock-paper-scissors and tic-tac-toe with Lowdie", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an engine config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the bot's moves (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Board drawing style (overrides the config file)
    #[arg(long, value_enum)]
    pub encoding: Option<BoardEncoding>,

    /// Print boards without a Markdown code fence
    #[arg(long)]
    pub no_fence: bool,

    /// Print one JSON object per reply
    #[arg(long)]
    pub json: bool,

    /// Conversation id to talk in
    #[arg(long, default_value = "0")]
    pub conversation: ConversationId,
}
