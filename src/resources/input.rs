use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::utils::ConfigError;

/// Named control axes the flight controls listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisName {
    EngineBoost,
    SlowDown,
    RightRotation,
}

impl AxisName {
    pub const ALL: [AxisName; 3] = [
        AxisName::EngineBoost,
        AxisName::SlowDown,
        AxisName::RightRotation,
    ];
}

impl fmt::Display for AxisName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AxisName::EngineBoost => "EngineBoost",
            AxisName::SlowDown => "SlowDown",
            AxisName::RightRotation => "RightRotation",
        };
        f.write_str(name)
    }
}

/// A key contributing `scale` to an axis while held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyAxisBinding {
    pub key: KeyCode,
    #[serde(default = "unit_scale")]
    pub scale: f32,
}

fn unit_scale() -> f32 {
    1.0
}

impl KeyAxisBinding {
    pub fn new(key: KeyCode, scale: f32) -> Self {
        Self { key, scale }
    }
}

/// Key mappings for every named axis.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisBindings {
    pub axes: HashMap<AxisName, Vec<KeyAxisBinding>>,
}

impl Default for AxisBindings {
    fn default() -> Self {
        let axes = HashMap::from([
            (
                AxisName::EngineBoost,
                vec![KeyAxisBinding::new(KeyCode::KeyW, 1.0)],
            ),
            (
                AxisName::SlowDown,
                vec![KeyAxisBinding::new(KeyCode::KeyS, 1.0)],
            ),
            (
                AxisName::RightRotation,
                vec![
                    KeyAxisBinding::new(KeyCode::KeyD, 1.0),
                    KeyAxisBinding::new(KeyCode::KeyA, -1.0),
                ],
            ),
        ]);
        Self { axes }
    }
}

impl AxisBindings {
    pub fn bindings(&self, axis: AxisName) -> &[KeyAxisBinding] {
        self.axes.get(&axis).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Axis value for the keys currently held: the sum of their scales,
    /// clamped to `[-1, 1]`.
    pub fn value(&self, axis: AxisName, keyboard: &ButtonInput<KeyCode>) -> f32 {
        self.bindings(axis)
            .iter()
            .filter(|binding| keyboard.pressed(binding.key))
            .map(|binding| binding.scale)
            .sum::<f32>()
            .clamp(-1.0, 1.0)
    }

    /// Every named axis must have at least one binding.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for axis in AxisName::ALL {
            if self.bindings(axis).is_empty() {
                return Err(ConfigError::MissingAxis(axis));
            }
        }
        Ok(())
    }
}

/// Axis values polled this frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisValues {
    pub engine_boost: f32,
    pub slow_down: f32,
    pub right_rotation: f32,
}

impl AxisValues {
    pub fn set(&mut self, axis: AxisName, value: f32) {
        let value = value.clamp(-1.0, 1.0);
        match axis {
            AxisName::EngineBoost => self.engine_boost = value,
            AxisName::SlowDown => self.slow_down = value,
            AxisName::RightRotation => self.right_rotation = value,
        }
    }
}
