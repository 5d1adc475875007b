//! Tests for loading engine configuration from disk.

use std::io::Write;
use tictactoe_core::{Difficulty, EngineConfig, GameEngine, Mark, Mode};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"human-vs-computer\"").unwrap();
    writeln!(file, "difficulty = \"easy\"").unwrap();
    writeln!(file, "seed = 99").unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), Mode::HumanVsComputer);
    assert_eq!(*config.difficulty(), Difficulty::Easy);
    assert_eq!(*config.seed(), Some(99));
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_engine_from_config() {
    let config = EngineConfig::default()
        .with_mode(Mode::HumanVsComputer)
        .with_difficulty(Difficulty::Hard)
        .with_seed(5);

    let mut engine = GameEngine::from_config(&config);
    assert_eq!(engine.seed(), 5);
    assert_eq!(engine.mode(), Mode::HumanVsComputer);
    assert_eq!(engine.difficulty(), Difficulty::Hard);

    assert!(engine.apply_move(0, 0));
    assert_eq!(engine.history().len(), 2);
    assert_eq!(engine.history()[1].mark, Mark::O);
}

#[test]
fn test_same_config_seed_replays_game() {
    let config = EngineConfig::new(Mode::HumanVsComputer, Difficulty::Easy, Some(321));
    let play = || {
        let mut engine = GameEngine::from_config(&config);
        while engine.awaiting_human() {
            let pos = engine.board().empty_positions()[0];
            engine.apply_move(pos.row(), pos.col());
        }
        engine.history().to_vec()
    };
    assert_eq!(play(), play());
}

#[test]
fn test_config_round_trips_through_json() {
    let config = EngineConfig::new(Mode::HumanVsHuman, Difficulty::Medium, None);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"mode":"human-vs-human","difficulty":"medium","seed":null}"#);
}
