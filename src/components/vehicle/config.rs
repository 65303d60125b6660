use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{period_duration, ConfigError};

/// Editable handling parameters for a vehicle.
///
/// Speeds are in world units per second, angles in degrees and times in
/// seconds. Every field has a default, so a YAML file only needs to name the
/// values it changes.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTuning {
    /// How quickly forward speed changes. Carried for editors; the scripted
    /// controls step speed by `change_value` instead.
    pub acceleration: f32,
    /// Upper bound on the magnitude of each angular rate (deg/s).
    pub turn_speed: f32,
    pub max_speed: f32,
    pub min_speed: f32,
    /// Speed change per unit of boost or slow-down input.
    pub change_value: f32,
    /// Baseline speed the vehicle drifts back to when neither boosting nor braking.
    pub cruise_speed: f32,
    pub initial_forward_speed: f32,

    /// Lower bound of the boost resource. Boost is refused at or below it.
    pub boost_min: f32,
    /// Upper bound of the boost resource, also its value at spawn.
    pub boost_max: f32,
    /// Amount regenerated or spent per engine tick.
    pub boost_step: f32,
    /// Regeneration only happens below this value.
    pub boost_regen_ceiling: f32,
    /// Spending down to this value or below overheats the engine.
    pub overheat_threshold: f32,
    /// Engine tick period.
    pub boost_tick_period: f32,
    /// Forced cooldown after an overheat.
    pub overheat_cooldown: f32,

    /// Bank angle past which steering input is ignored.
    pub roll_limit: f32,
    /// Roll change per steering or auto-level call.
    pub roll_step: f32,
    /// Yaw change per unit of steering input.
    pub yaw_per_roll_step: f32,
    /// Auto-level stops once |roll| is at or below this.
    pub level_threshold: f32,
    /// Camera yaw drift per auto-level call.
    pub camera_drift: f32,

    /// Slerp factor applied toward the hit surface orientation, once per hit.
    pub hit_deflection: f32,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            acceleration: 500.0,
            turn_speed: 50.0,
            max_speed: 24000.0,
            min_speed: 6000.0,
            change_value: 40.0,
            cruise_speed: 10000.0,
            initial_forward_speed: 10000.0,
            boost_min: 1.0,
            boost_max: 20.0,
            boost_step: 0.1,
            boost_regen_ceiling: 19.9,
            overheat_threshold: 1.1,
            boost_tick_period: 0.1,
            overheat_cooldown: 19.0,
            roll_limit: 80.0,
            roll_step: 1.0,
            yaw_per_roll_step: 1.0 / 50.0,
            level_threshold: 1.0,
            camera_drift: 0.02,
            hit_deflection: 0.025,
        }
    }
}

impl FlightTuning {
    pub fn clamp_speed(&self, speed: f32) -> f32 {
        speed.clamp(self.min_speed, self.max_speed)
    }

    pub fn clamp_boost(&self, boost_time: f32) -> f32 {
        boost_time.clamp(self.boost_min, self.boost_max)
    }

    /// Checks the relations the flight model relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("acceleration", self.acceleration),
            ("turn_speed", self.turn_speed),
            ("max_speed", self.max_speed),
            ("min_speed", self.min_speed),
            ("change_value", self.change_value),
            ("cruise_speed", self.cruise_speed),
            ("initial_forward_speed", self.initial_forward_speed),
            ("boost_min", self.boost_min),
            ("boost_max", self.boost_max),
            ("boost_step", self.boost_step),
            ("boost_regen_ceiling", self.boost_regen_ceiling),
            ("overheat_threshold", self.overheat_threshold),
            ("boost_tick_period", self.boost_tick_period),
            ("overheat_cooldown", self.overheat_cooldown),
            ("roll_limit", self.roll_limit),
            ("roll_step", self.roll_step),
            ("yaw_per_roll_step", self.yaw_per_roll_step),
            ("level_threshold", self.level_threshold),
            ("camera_drift", self.camera_drift),
            ("hit_deflection", self.hit_deflection),
        ];
        if let Some((name, _)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite")));
        }

        if self.min_speed > self.max_speed {
            return Err(invalid(format!(
                "min_speed ({}) exceeds max_speed ({})",
                self.min_speed, self.max_speed
            )));
        }
        for (name, speed) in [
            ("cruise_speed", self.cruise_speed),
            ("initial_forward_speed", self.initial_forward_speed),
        ] {
            if speed < self.min_speed || speed > self.max_speed {
                return Err(invalid(format!(
                    "{name} ({speed}) lies outside [{}, {}]",
                    self.min_speed, self.max_speed
                )));
            }
        }
        if self.boost_min > self.boost_max {
            return Err(invalid(format!(
                "boost_min ({}) exceeds boost_max ({})",
                self.boost_min, self.boost_max
            )));
        }
        for (name, value) in [
            ("boost_step", self.boost_step),
            ("boost_tick_period", self.boost_tick_period),
            ("overheat_cooldown", self.overheat_cooldown),
            ("change_value", self.change_value),
            ("roll_step", self.roll_step),
        ] {
            if value <= 0.0 {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        // Periods are timed in whole microseconds.
        for (name, value) in [
            ("boost_tick_period", self.boost_tick_period),
            ("overheat_cooldown", self.overheat_cooldown),
        ] {
            if period_duration(value).is_zero() {
                return Err(invalid(format!(
                    "{name} must be at least one microsecond, got {value}"
                )));
            }
        }
        if self.turn_speed < 0.0 || self.roll_limit < 0.0 || self.level_threshold < 0.0 {
            return Err(invalid(
                "turn_speed, roll_limit and level_threshold must not be negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.hit_deflection) {
            return Err(invalid(format!(
                "hit_deflection must lie in [0, 1], got {}",
                self.hit_deflection
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError(message)
}
