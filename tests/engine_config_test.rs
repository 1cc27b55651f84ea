//! Tests for loading engine configuration from disk.

use std::io::Write;
use tictactoe_engine::{EngineConfig, Game, Strategy};

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "seed = 5").unwrap();
    writeln!(file, r#"strategies = ["win_now", "random_free"]"#).unwrap();

    let config = EngineConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(config.seed(), &Some(5));
    assert_eq!(
        config.strategies(),
        &vec![Strategy::WinNow, Strategy::RandomFree]
    );

    let game = Game::from_config(&config);
    assert_eq!(game.strategies(), config.strategies().as_slice());
}

#[test]
fn test_missing_file_reports_read_error() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_seeded_configs_play_identically() {
    let config = EngineConfig::new(None).with_seed(17);
    let mut a = Game::from_config(&config);
    let mut b = Game::from_config(&config);

    a.accept_user_move(1, 1).unwrap();
    b.accept_user_move(1, 1).unwrap();
    assert_eq!(a.create_computer_move(), b.create_computer_move());
}
