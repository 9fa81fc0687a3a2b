//! Tests for configuration loading and name resolution.

use std::path::Path;

use noughts::AppConfig;
use noughts_engine::{GameConfig, OpponentKind, Player};
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.scores_path(), Path::new("noughts_scores.json"));
    assert_eq!(*config.think_delay_ms(), 500);
    assert_eq!(*config.opponent(), OpponentKind::OptimalAi);
    assert_eq!(*config.computer_side(), Player::O);
    assert!(*config.sound());
}

#[test]
fn test_sound_can_be_turned_off() {
    let config = AppConfig::from_toml("sound = false").unwrap();
    assert!(!*config.sound());
    assert_eq!(*config.think_delay_ms(), 500);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config = AppConfig::from_toml(
        r#"
        think_delay_ms = 0
        opponent = "random-ai"
        x_name = "Alice"
        "#,
    )
    .unwrap();

    assert_eq!(*config.think_delay_ms(), 0);
    assert_eq!(*config.opponent(), OpponentKind::RandomAi);
    assert_eq!(config.x_name().as_deref(), Some("Alice"));
    assert_eq!(config.scores_path(), Path::new("noughts_scores.json"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let err = AppConfig::from_toml("opponent = \"grandmaster\"").unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{err}");
}

#[test]
fn test_from_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("noughts.toml");
    std::fs::write(&path, "scores_path = \"elsewhere.json\"\ncomputer_side = \"X\"\n").unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config.scores_path(), Path::new("elsewhere.json"));
    assert_eq!(*config.computer_side(), Player::X);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(*config.think_delay_ms(), 500);
}

#[test]
fn test_names_for_two_player_game() {
    let names = AppConfig::default().player_names(&GameConfig::two_player());
    assert_eq!(names.name(Player::X), "Player X");
    assert_eq!(names.name(Player::O), "Player O");
}

#[test]
fn test_computer_side_is_called_ai() {
    let game = GameConfig::against(OpponentKind::RandomAi);
    let names = AppConfig::default().player_names(&game);
    assert_eq!(names.name(Player::X), "Player X");
    assert_eq!(names.name(Player::O), "AI");

    let game = game.with_computer_side(Player::X);
    let names = AppConfig::default().player_names(&game);
    assert_eq!(names.name(Player::X), "AI");
    assert_eq!(names.name(Player::O), "Player O");
}

#[test]
fn test_configured_names_override_defaults() {
    let config = AppConfig::default().with_o_name(Some("Deep Blue".to_string()));
    let names = config.player_names(&GameConfig::against(OpponentKind::OptimalAi));
    assert_eq!(names.name(Player::O), "Deep Blue");
}
