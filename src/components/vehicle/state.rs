use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::FlightTuning;
use crate::utils::Rotator;

/// Whether the engine is in forced cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeatState {
    Cool,
    Overheated,
}

/// Mutable flight state of a vehicle.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Forward speed, kept within the tuning's speed range.
    pub forward_speed: f32,
    /// Angular rates in degrees per second.
    pub pitch_speed: f32,
    pub yaw_speed: f32,
    pub roll_speed: f32,
    /// Boost resource, kept within the tuning's boost range.
    pub engine_boost_time: f32,
    /// Set while boost input is held and permitted.
    pub engine_control: bool,
    pub over_heating: bool,
}

impl VehicleState {
    /// State at spawn: initial speed, full boost resource, engine cool.
    pub fn from_tuning(tuning: &FlightTuning) -> Self {
        Self {
            forward_speed: tuning.clamp_speed(tuning.initial_forward_speed),
            pitch_speed: 0.0,
            yaw_speed: 0.0,
            roll_speed: 0.0,
            engine_boost_time: tuning.boost_max,
            engine_control: false,
            over_heating: false,
        }
    }

    pub fn heat_state(&self) -> HeatState {
        if self.over_heating {
            HeatState::Overheated
        } else {
            HeatState::Cool
        }
    }

    /// Boost is refused while overheated or once the resource is spent.
    pub fn can_boost(&self, tuning: &FlightTuning) -> bool {
        !self.over_heating && self.engine_boost_time > tuning.boost_min
    }

    pub fn angular_rates(&self) -> Rotator {
        Rotator::new(self.pitch_speed, self.yaw_speed, self.roll_speed)
    }

    /// Sets the angular rates, each limited to `±turn_speed`.
    pub fn set_angular_rates(&mut self, rates: Rotator, tuning: &FlightTuning) {
        let limit = tuning.turn_speed;
        self.pitch_speed = rates.pitch.clamp(-limit, limit);
        self.yaw_speed = rates.yaw.clamp(-limit, limit);
        self.roll_speed = rates.roll.clamp(-limit, limit);
    }
}
