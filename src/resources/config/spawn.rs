use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{ConfigError, Rotator};

/// Where and how the player vehicle enters the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleSpawnConfig {
    pub name: String,
    pub position: [f32; 3],
    /// Initial orientation in degrees.
    pub rotation: Rotator,
    /// Radius of the swept hull; zero sweeps a point.
    pub hull_radius: f32,
}

impl Default for VehicleSpawnConfig {
    fn default() -> Self {
        Self {
            name: "WarPlane".to_string(),
            position: [0.0, 5000.0, 0.0],
            rotation: Rotator::ZERO,
            hull_radius: 150.0,
        }
    }
}

impl VehicleSpawnConfig {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.position))
            .with_rotation(self.rotation.to_quat())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.hull_radius.is_finite() || self.hull_radius < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "hull_radius must be a non-negative number, got {}",
                self.hull_radius
            )));
        }
        if self.position.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValidationError(
                "spawn position must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
