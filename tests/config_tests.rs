use std::fs;

use tui_snake::core::{GameConfig, GameState};

#[test]
fn config_file_round_trips_through_json() {
    let config = GameConfig {
        grid_width: 16,
        grid_height: 12,
        seed: Some(4242),
        speed_up: false,
        ..Default::default()
    };

    let path = std::env::temp_dir().join(format!("tui-snake-config-{}.json", std::process::id()));
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    let loaded = GameConfig::from_file(&path);
    let _ = fs::remove_file(&path);

    let loaded = loaded.unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());

    let state = GameState::new(loaded, 4242);
    assert_eq!((state.grid_width(), state.grid_height()), (16, 12));
    assert_eq!(state.seed(), 4242);
}

#[test]
fn malformed_config_file_is_an_error() {
    let path = std::env::temp_dir().join(format!("tui-snake-bad-{}.json", std::process::id()));
    fs::write(&path, "{ not json").unwrap();
    let err = GameConfig::from_file(&path).unwrap_err();
    let _ = fs::remove_file(&path);

    assert!(format!("{err:#}").contains("invalid config file"));
}
