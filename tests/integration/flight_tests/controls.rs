use approx::assert_relative_eq;
use bevy::prelude::*;
use warplane::{components::FlightTuning, utils::Rotator};

use crate::common::{
    assert_camera_level, assert_rotator_eq, assert_vehicle_state_valid, create_test_config,
    TestAppBuilder,
};

#[test]
fn test_boost_with_w() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();

    app.press(KeyCode::KeyW);
    app.run_frame();

    let state = app.vehicle_state();
    assert_eq!(state.forward_speed, 10040.0);
    assert!(state.engine_control);

    app.run_steps(4);
    let state = app.vehicle_state();
    assert_eq!(state.forward_speed, 10200.0);
    assert_relative_eq!(state.engine_boost_time, 19.5, epsilon = 1e-3);

    app.release(KeyCode::KeyW);
    app.run_frame();

    let state = app.vehicle_state();
    assert_eq!(state.forward_speed, 10160.0);
    assert!(!state.engine_control);
}

#[test]
fn test_slow_down_with_s() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();

    app.press(KeyCode::KeyS);
    app.run_steps(10);
    assert_eq!(app.vehicle_state().forward_speed, 9600.0);

    app.release(KeyCode::KeyS);
    app.run_steps(2);
    assert_eq!(app.vehicle_state().forward_speed, 9680.0);
}

#[test]
fn test_speed_bounds_hold_under_held_input() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();
    let tuning = FlightTuning::default();

    app.press(KeyCode::KeyS);
    for _ in 0..150 {
        app.run_frame();
        assert_vehicle_state_valid(&app.vehicle_state(), &tuning);
    }
    assert_eq!(app.vehicle_state().forward_speed, tuning.min_speed);
}

#[test]
fn test_bank_right_keeps_camera_level() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();

    app.press(KeyCode::KeyD);
    app.run_steps(5);

    let vehicle = app.vehicle_transform();
    let rotator = Rotator::from_quat(vehicle.rotation);
    assert_relative_eq!(rotator.roll, 5.0, epsilon = 1e-2);
    assert_relative_eq!(rotator.yaw, 0.1, epsilon = 1e-3);

    let camera = app.camera_transform().unwrap();
    assert_camera_level(&vehicle, &camera);

    // Releasing the key levels the wings one degree per frame.
    app.release(KeyCode::KeyD);
    app.run_steps(10);

    let vehicle = app.vehicle_transform();
    let rotator = Rotator::from_quat(vehicle.rotation);
    assert!(rotator.roll.abs() <= 1.0 + 1e-3);
    assert!(rotator.roll > 0.0 - 1e-3);
    assert_camera_level(&vehicle, &app.camera_transform().unwrap());
}

#[test]
fn test_bank_left_with_a() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();

    app.press(KeyCode::KeyA);
    app.run_steps(3);

    let rotator = Rotator::from_quat(app.vehicle_transform().rotation);
    assert_rotator_eq(rotator, Rotator::new(0.0, -0.06, -3.0), 1e-3);
}

#[test]
fn test_roll_capped_past_limit() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();

    app.press(KeyCode::KeyD);
    app.run_steps(120);

    let rotator = Rotator::from_quat(app.vehicle_transform().rotation);
    assert!(rotator.roll > 79.9 && rotator.roll < 81.1);
}

#[test]
fn test_opposite_keys_cancel() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();

    app.press(KeyCode::KeyA);
    app.press(KeyCode::KeyD);
    app.run_steps(5);

    let rotator = Rotator::from_quat(app.vehicle_transform().rotation);
    assert_relative_eq!(rotator.roll, 0.0, epsilon = 1e-4);
    assert_relative_eq!(rotator.yaw, 0.0, epsilon = 1e-4);
}

#[test]
fn test_custom_change_value() {
    let mut app = TestAppBuilder::new()
        .with_config(create_test_config())
        .with_tuning(FlightTuning {
            change_value: 100.0,
            ..Default::default()
        })
        .build();

    app.press(KeyCode::KeyW);
    app.run_frame();
    assert_eq!(app.vehicle_state().forward_speed, 10100.0);
}
