//! Tests for the JSON score store.

use noughts::{ScoreStore, ScoreTally};
use noughts_engine::{OpponentKind, Player};
use tempfile::TempDir;

#[test]
fn test_missing_file_starts_at_zero() {
    let dir = TempDir::new().unwrap();
    let store = ScoreStore::load(dir.path().join("scores.json")).unwrap();
    assert_eq!(store.tally(OpponentKind::Human), ScoreTally::default());
    assert!(!store.path().exists());
}

#[test]
fn test_record_win_persists_per_mode() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");

    let mut store = ScoreStore::load(&path).unwrap();
    store.record_win(OpponentKind::Human, Player::X).unwrap();
    store.record_win(OpponentKind::Human, Player::X).unwrap();
    let tally = store.record_win(OpponentKind::RandomAi, Player::O).unwrap();
    assert_eq!(tally.wins(Player::O), 1);

    let reloaded = ScoreStore::load(&path).unwrap();
    assert_eq!(reloaded.tally(OpponentKind::Human).wins(Player::X), 2);
    assert_eq!(reloaded.tally(OpponentKind::Human).wins(Player::O), 0);
    assert_eq!(reloaded.tally(OpponentKind::RandomAi).wins(Player::O), 1);
    assert_eq!(reloaded.tally(OpponentKind::OptimalAi), ScoreTally::default());
}

#[test]
fn test_file_is_keyed_by_mode_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");

    let mut store = ScoreStore::load(&path).unwrap();
    store.record_win(OpponentKind::OptimalAi, Player::O).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["optimal-ai"]["o"], 1);
    assert_eq!(json["optimal-ai"]["x"], 0);
}

#[test]
fn test_reads_hand_written_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");
    std::fs::write(&path, r#"{"human":{"x":3,"o":1},"random-ai":{"x":5}}"#).unwrap();

    let store = ScoreStore::load(&path).unwrap();
    assert_eq!(store.tally(OpponentKind::Human).wins(Player::X), 3);
    assert_eq!(store.tally(OpponentKind::Human).wins(Player::O), 1);
    assert_eq!(store.tally(OpponentKind::RandomAi).wins(Player::O), 0);
}

#[test]
fn test_reset_only_touches_one_mode() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");

    let mut store = ScoreStore::load(&path).unwrap();
    store.record_win(OpponentKind::Human, Player::O).unwrap();
    store.record_win(OpponentKind::RandomAi, Player::X).unwrap();
    store.reset(OpponentKind::Human).unwrap();

    let reloaded = ScoreStore::load(&path).unwrap();
    assert_eq!(reloaded.tally(OpponentKind::Human), ScoreTally::default());
    assert_eq!(reloaded.tally(OpponentKind::RandomAi).wins(Player::X), 1);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("scores.json");

    let mut store = ScoreStore::load(&path).unwrap();
    store.record_win(OpponentKind::Human, Player::X).unwrap();
    assert!(path.exists());
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");
    std::fs::write(&path, "not json").unwrap();

    let err = ScoreStore::load(&path).unwrap_err();
    assert!(err.message.contains("Malformed score file"), "{err}");
}

#[test]
fn test_failed_save_leaves_tally_unchanged() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let mut store = ScoreStore::load(blocker.join("scores.json")).unwrap();
    assert!(store.record_win(OpponentKind::Human, Player::X).is_err());
    assert_eq!(store.tally(OpponentKind::Human), ScoreTally::default());
    assert!(store.reset(OpponentKind::RandomAi).is_err());
    assert_eq!(store.tally(OpponentKind::RandomAi), ScoreTally::default());
}

#[test]
fn test_failed_save_restores_previous_tally() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");
    let mut store = ScoreStore::load(&path).unwrap();
    store.record_win(OpponentKind::Human, Player::O).unwrap();

    // Replace the file with a directory so the next write fails.
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();
    assert!(store.record_win(OpponentKind::Human, Player::O).is_err());
    assert_eq!(store.tally(OpponentKind::Human).wins(Player::O), 1);
}
