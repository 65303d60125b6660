use bevy::prelude::*;

use crate::components::{FlightTuning, PlayerController, VehicleState};
use crate::resources::AxisValues;

/// Handler for the `EngineBoost` axis.
///
/// With input held and boost available, the engine is engaged and speed rises
/// by `val * change_value`. Otherwise the engine is released and any speed
/// above cruise bleeds off by `change_value`. Runs once per input poll and is
/// deliberately not scaled by frame time.
pub fn engine_boost_input(state: &mut VehicleState, tuning: &FlightTuning, val: f32) {
    if val != 0.0 && state.can_boost(tuning) {
        state.engine_control = true;
        state.forward_speed = tuning.clamp_speed(state.forward_speed + val * tuning.change_value);
    } else {
        state.engine_control = false;
        if state.forward_speed > tuning.cruise_speed {
            state.forward_speed = tuning.clamp_speed(state.forward_speed - tuning.change_value);
        }
    }
}

/// Handler for the `SlowDown` axis.
///
/// With input held, speed drops by `val * change_value`. Otherwise any speed
/// below cruise recovers by `change_value`.
pub fn slow_down_input(state: &mut VehicleState, tuning: &FlightTuning, val: f32) {
    if val != 0.0 {
        state.forward_speed = tuning.clamp_speed(state.forward_speed - val * tuning.change_value);
    } else if state.forward_speed < tuning.cruise_speed {
        state.forward_speed = tuning.clamp_speed(state.forward_speed + tuning.change_value);
    }
}

pub fn engine_boost_system(
    axes: Res<AxisValues>,
    mut query: Query<(&mut VehicleState, &FlightTuning), With<PlayerController>>,
) {
    for (mut state, tuning) in query.iter_mut() {
        engine_boost_input(&mut state, tuning, axes.engine_boost);
    }
}

pub fn slow_down_system(
    axes: Res<AxisValues>,
    mut query: Query<(&mut VehicleState, &FlightTuning), With<PlayerController>>,
) {
    for (mut state, tuning) in query.iter_mut() {
        slow_down_input(&mut state, tuning, axes.slow_down);
    }
}
