use approx::assert_relative_eq;
use bevy::prelude::*;
use warplane::{
    components::{camera_world_rotation, FlightTuning, VehicleState},
    utils::Rotator,
};

/// Assert that a vehicle's state respects the tuning bounds
#[track_caller]
pub fn assert_vehicle_state_valid(state: &VehicleState, tuning: &FlightTuning) {
    assert!(state.forward_speed.is_finite(), "Forward speed is not finite");
    assert!(
        state.forward_speed >= tuning.min_speed && state.forward_speed <= tuning.max_speed,
        "Forward speed {} outside [{}, {}]",
        state.forward_speed,
        tuning.min_speed,
        tuning.max_speed
    );
    assert!(
        state.engine_boost_time >= tuning.boost_min
            && state.engine_boost_time <= tuning.boost_max,
        "Boost time {} outside [{}, {}]",
        state.engine_boost_time,
        tuning.boost_min,
        tuning.boost_max
    );
}

/// Assert that two orientations match within tolerance (degrees)
#[track_caller]
pub fn assert_rotator_eq(actual: Rotator, expected: Rotator, epsilon: f32) {
    assert_relative_eq!(actual.pitch, expected.pitch, epsilon = epsilon);
    assert_relative_eq!(actual.yaw, expected.yaw, epsilon = epsilon);
    assert_relative_eq!(actual.roll, expected.roll, epsilon = epsilon);
}

/// Assert that a child camera has no bank in world space
#[track_caller]
pub fn assert_camera_level(vehicle: &Transform, camera: &Transform) {
    let world = Rotator::from_quat(camera_world_rotation(vehicle.rotation, camera.rotation));
    assert_relative_eq!(world.roll, 0.0, epsilon = 1e-2);
}
