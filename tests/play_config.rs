//! Loading and saving play configuration files

use std::fs;

use tempfile::TempDir;
use tictactoe_search::{
    Board, Error, Player,
    agents::{AgentKind, play_game},
    config::PlayConfig,
};

#[test]
fn config_round_trips_through_a_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("play.json");

    let config = PlayConfig::new()
        .with_agent(Player::X, AgentKind::Random)
        .with_agent(Player::O, AgentKind::Minimax)
        .with_seed(11)
        .with_start(&Board::from_string("X........").unwrap());
    config.save(&path).unwrap();

    let loaded = PlayConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.start_board().unwrap().player(), Player::O);
}

#[test]
fn loaded_config_drives_a_game() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("play.json");
    fs::write(&path, r#"{"x": "alpha-beta", "o": "random", "seed": 3}"#).unwrap();

    let config = PlayConfig::load(&path).unwrap();
    let mut x = config.x.build(Player::X, config.seed_for(Player::X));
    let mut o = config.o.build(Player::O, config.seed_for(Player::O));
    let game = play_game(x.as_mut(), o.as_mut(), config.start_board().unwrap()).unwrap();

    assert!(game.is_over());
    assert_ne!(game.current_state().unwrap().utility(), -1);
}

#[test]
fn invalid_start_position_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("play.json");
    fs::write(&path, r#"{"start": "OO......."}"#).unwrap();

    match PlayConfig::load(&path) {
        Err(Error::InvalidConfiguration { message }) => {
            assert!(message.contains("start position"), "{message}");
        }
        other => panic!("expected invalid configuration, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = PlayConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("play.json");
    fs::write(&path, "{ not json").unwrap();

    let err = PlayConfig::load(&path).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}
