use warplane::{resources::WarplaneConfig, utils::Rotator};

/// Default vehicle flying level at 5000 along -Z, diagnostics on.
pub fn create_test_config() -> WarplaneConfig {
    WarplaneConfig {
        diagnostics: true,
        ..Default::default()
    }
}

/// Vehicle pitched nose-down by `pitch` degrees.
pub fn create_diving_config(pitch: f32) -> WarplaneConfig {
    let mut config = create_test_config();
    config.vehicle.rotation = Rotator::new(-pitch, 0.0, 0.0);
    config
}

pub fn create_config_yaml() -> &'static str {
    r#"
tuning:
  change_value: 100.0
  cruise_speed: 12000.0
  initial_forward_speed: 12000.0
vehicle:
  name: Yaml Plane
  position: [0.0, 800.0, 0.0]
  hull_radius: 50.0
camera: null
diagnostics: true
"#
}
