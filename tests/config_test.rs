//! Tests for configuration loading, saving and validation

use head_gesture_detection::{
    config::{Config, GestureConfig, EXAMPLE_CONFIG},
    constants::*,
    engine::GestureEngine,
    landmark_input::InputFormat,
    Error,
};
use std::path::PathBuf;

fn temp_config_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("head_gesture_{}_{}.yaml", name, std::process::id()))
}

#[test]
fn test_defaults_match_tuning_constants() {
    let config = GestureConfig::default();

    assert_eq!(config.window_size, 10);
    assert_eq!(config.nod_sensitivity_base, 0.0125);
    assert_eq!(config.shake_sensitivity_base, 0.02);
    assert_eq!(config.vertical_adjustment, 0.2);
    assert_eq!(config.horizontal_adjustment, 0.12);
    assert_eq!(config.reference_span, 0.5);

    let full = Config::default();
    assert_eq!(full.landmarks.nod_point, CHIN_LANDMARK);
    assert_eq!(full.landmarks.shake_point, SIDE_HEAD_LANDMARK);
    assert_eq!(full.landmarks.top_head, TOP_HEAD_LANDMARK);
    assert_eq!(full.landmarks.bottom_head, BOTTOM_HEAD_LANDMARK);
    assert_eq!(full.input.format, InputFormat::Points);
}

#[test]
fn test_file_round_trip() {
    let path = temp_config_path("round_trip");

    let mut config = Config::default();
    config.gesture.window_size = 14;
    config.gesture.horizontal_adjustment = 0.1;
    config.input.format = InputFormat::Mesh;
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.gesture, config.gesture);
    assert_eq!(loaded.landmarks, config.landmarks);
    assert_eq!(loaded.input.format, InputFormat::Mesh);
}

#[test]
fn test_example_config_parses() {
    let config = Config::from_yaml(EXAMPLE_CONFIG).unwrap();
    assert!(config.validate().is_ok());
    assert!(GestureEngine::new(&config.gesture).is_ok());
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::from_yaml("{}").unwrap();
    assert_eq!(config.gesture, GestureConfig::default());
}

#[test]
fn test_unknown_format_rejected() {
    let result = Config::from_yaml("input:\n  format: video\n");
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_missing_file() {
    let result = Config::from_file("no/such/config.yaml");
    match result {
        Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_validation_messages() {
    let mut config = Config::default();
    config.gesture.window_size = 0;
    match config.validate() {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Window size")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }

    let mut config = Config::default();
    config.gesture.nod_sensitivity_base = f64::INFINITY;
    match config.validate() {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Nod sensitivity")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }

    let mut config = Config::default();
    config.landmarks.shake_point = config.landmarks.nod_point;
    match config.validate() {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("199")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_oversized_window_rejected() {
    for window_size in [MAX_WINDOW_SIZE + 1, 1 << 62, usize::MAX] {
        let config = GestureConfig {
            window_size,
            ..GestureConfig::default()
        };

        match GestureEngine::new(&config) {
            Err(Error::ConfigError(msg)) => assert!(msg.contains("at most")),
            other => panic!("Expected ConfigError for window size {window_size}, got {other:?}"),
        }
    }

    let config = GestureConfig {
        window_size: MAX_WINDOW_SIZE,
        ..GestureConfig::default()
    };
    assert!(GestureEngine::new(&config).is_ok());
}

#[test]
fn test_oversized_window_in_yaml_rejected() {
    let config = Config::from_yaml("gesture:\n  window_size: 18446744073709551615\n").unwrap();
    assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
}
