//! Session progress survives a save file round trip.

use std::fs;

use glam::DVec2;
use kings_trial::{
    InputSnapshot, LevelRules, PhysicsConfig, PlayerEvent, SaveData, SaveError, Session, World,
};
use rstest::rstest;
use test_utils::{rect, single_level};

#[rstest]
fn collected_coin_survives_a_save_file() {
    let config = PhysicsConfig::default();
    let rules = LevelRules::original();
    let ledge = rect(480.0, 207.0, 120.0, 20.0);
    let levels = single_level(vec![ledge]);
    let world = World::new(&levels, &rules, &config);

    let mut session = Session::new_game(&config);
    session.player.position = DVec2::new(500.0, 167.0);
    let landing = session.step(&InputSnapshot::idle(), world, 0.5);
    assert!(landing.emitted(PlayerEvent::CoinCollected { coin: 0 }));
    session.step(&InputSnapshot::idle().press_jump(), world, 1.0);
    assert!(session.player.is_charging());

    let path = std::env::temp_dir().join(format!("kings_trial_save_{}.json", std::process::id()));
    session
        .save(3.0)
        .store(&path)
        .unwrap_or_else(|e| panic!("store: {e}"));
    let loaded = SaveData::load(&path).unwrap_or_else(|e| panic!("load: {e}"));
    fs::remove_file(&path).unwrap_or_else(|e| panic!("cleanup: {e}"));

    let restored = Session::restore(&loaded, &config, 1, 10.0);
    assert_eq!(restored.coins.collected(), 1);
    assert_eq!(restored.coins.flags().first(), Some(&true));
    assert_eq!(restored.player.position, session.player.position);
    assert!((restored.elapsed(10.0) - 2.0).abs() < 1e-9);
}

#[rstest]
fn missing_save_file_is_an_io_error() {
    let path = std::env::temp_dir().join("kings_trial_definitely_missing_save.json");
    assert!(matches!(SaveData::load(&path), Err(SaveError::Io(_))));
}
