use approx::assert_relative_eq;
use warplane::{components::FlightTuning, utils::Rotator};

use crate::common::{assert_vehicle_state_valid, create_test_config, TestAppBuilder};

#[test]
fn test_straight_level_flight() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();

    // One second of flight at cruise speed
    app.run_steps(10);

    let transform = app.vehicle_transform();
    assert_relative_eq!(transform.translation.z, -10000.0, epsilon = 0.5);
    assert_relative_eq!(transform.translation.y, 5000.0, epsilon = 1e-3);
    assert_relative_eq!(transform.translation.x, 0.0, epsilon = 1e-3);

    let state = app.vehicle_state();
    assert_eq!(state.forward_speed, 10000.0);
    assert_vehicle_state_valid(&state, &FlightTuning::default());
}

#[test]
fn test_first_frame_does_not_move() {
    let app_config = create_test_config();
    let start = app_config.vehicle.transform().translation;
    let mut app = TestAppBuilder::new().with_config(app_config).build();

    assert_eq!(app.vehicle_transform().translation, start);
}

#[test]
fn test_angular_rates_rotate_vehicle() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();
    app.modify_vehicle(|state, tuning| {
        state.set_angular_rates(Rotator::new(0.0, 20.0, 0.0), tuning);
    });

    app.run_steps(10);

    let rotator = Rotator::from_quat(app.vehicle_transform().rotation);
    assert_relative_eq!(rotator.yaw, 20.0, epsilon = 1e-2);

    // The vehicle now drifts right of its starting track.
    assert!(app.vehicle_transform().translation.x > 0.0);
}

#[test]
fn test_angular_rates_limited_by_turn_speed() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();
    app.modify_vehicle(|state, tuning| {
        state.set_angular_rates(Rotator::new(0.0, 200.0, 0.0), tuning);
    });

    app.run_steps(10);

    let rotator = Rotator::from_quat(app.vehicle_transform().rotation);
    assert_relative_eq!(rotator.yaw, 50.0, epsilon = 1e-2);
}
