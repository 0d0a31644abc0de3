//! Lowdie - terminal console
//!
//! Feeds stdin lines to one conversation and prints the bot's replies.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use lowdie::{EngineConfig, Lowdie, Reply};
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the conversation
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    run_console(config, &cli)
}

/// Builds the engine config from the optional file and the command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(encoding) = cli.encoding {
        config = config.with_board_encoding(encoding);
    }
    if cli.no_fence {
        config = config.with_code_fence(false);
    }
    Ok(config)
}

/// Reads stdin line by line until EOF, answering each line.
#[instrument(skip_all, fields(conversation = cli.conversation))]
fn run_console(config: EngineConfig, cli: &Cli) -> Result<()> {
    let mut bot = Lowdie::new(config);
    info!("Console ready - say hi");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        match bot.answer(cli.conversation, &line) {
            Ok(replies) => {
                for reply in &replies {
                    print_reply(&mut stdout, reply, cli.json)?;
                }
            }
            Err(e) => warn!(error = %e, "Turn failed"),
        }
        stdout.flush()?;
    }

    info!("Input closed, shutting down");
    Ok(())
}

fn print_reply(out: &mut impl Write, reply: &Reply, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(reply)?)?;
        return Ok(());
    }
    writeln!(out, "{}\n", reply.text)?;
    let options = reply
        .expected_input
        .as_ref()
        .map(|input| input.options())
        .unwrap_or_default();
    if !options.is_empty() {
        let quoted: Vec<String> = options.iter().map(|o| format!("\"{o}\"")).collect();
        writeln!(out, "$ Choose from {}:", quoted.join(", "))?;
    }
    Ok(())
}
