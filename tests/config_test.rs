//! Tests for loading engine config files.

use std::fs;
use tempfile::TempDir;

use lowdie::{BoardEncoding, EngineConfig};

#[test]
fn test_from_file_reads_all_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("lowdie.toml");
    fs::write(
        &path,
        r#"board_encoding = "pretty"
code_fence = false
seed = 1234
restart_command = "/reset"
"#,
    )
    .expect("Failed to write TOML");

    let config = EngineConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.board_encoding(), BoardEncoding::Pretty);
    assert!(!*config.code_fence());
    assert_eq!(*config.seed(), Some(1234));
    assert_eq!(config.restart_command(), "/reset");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_unknown_restart_command_used_by_engine() {
    let config = EngineConfig::from_toml("restart_command = \"/reset\"").unwrap();
    let mut bot = lowdie::Lowdie::new(config.with_seed(3));
    bot.answer(1, "hi").unwrap();
    bot.answer(1, lowdie::ROCK_PAPER_SCISSORS).unwrap();

    // The default command is now ordinary (invalid) input
    let replies = bot.answer(1, "/start").unwrap();
    assert_eq!(replies[0].text, "Hey, that's invalid!");

    let replies = bot.answer(1, "/reset").unwrap();
    assert!(replies[0].text.starts_with("Hi! I'm Lowdie"));
}
