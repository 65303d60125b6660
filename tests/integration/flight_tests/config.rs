use bevy::prelude::*;
use std::io::Write;
use warplane::{plugins::WarplanePlugin, resources::WarplaneConfig, utils::ConfigError};

use crate::common::{create_config_yaml, TestAppBuilder};

#[test]
fn test_plugin_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(create_config_yaml().as_bytes()).unwrap();

    let plugin = WarplanePlugin::from_config_file(file.path()).unwrap();
    let mut app = TestAppBuilder::new()
        .with_config(plugin.config().clone())
        .build();

    let hull = app.hull();
    assert_eq!(hull.radius, 50.0);
    assert!(app.camera_transform().is_none());
    assert_eq!(app.vehicle_transform().translation.y, 800.0);

    assert_eq!(app.vehicle_name().as_deref(), Some("Yaml Plane"));

    app.press(KeyCode::KeyW);
    app.run_frame();
    assert_eq!(app.vehicle_state().forward_speed, 12100.0);
}

#[test]
fn test_missing_config_file() {
    let result = WarplanePlugin::from_config_file("does/not/exist.yaml");
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_invalid_config_fails_before_build() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"tuning:\n  min_speed: 30000.0\n").unwrap();

    let result = WarplanePlugin::from_config_file(file.path());
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_shipped_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/warplane.yaml");
    let config = WarplaneConfig::from_yaml_file(path).unwrap();
    assert_eq!(config, WarplaneConfig::default());
}

#[test]
fn test_sub_microsecond_tick_period_fails_before_build() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"tuning:\n  boost_tick_period: 1.0e-7\n").unwrap();

    let result = WarplanePlugin::from_config_file(file.path());
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}
