mod spawn;

pub use spawn::VehicleSpawnConfig;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::{ChaseCamera, FlightTuning};
use crate::resources::AxisBindings;
use crate::utils::ConfigError;

/// Everything needed to set up the player vehicle.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarplaneConfig {
    pub tuning: FlightTuning,
    pub bindings: AxisBindings,
    pub vehicle: VehicleSpawnConfig,
    /// Chase camera rig; `None` spawns the vehicle without one.
    pub camera: Option<ChaseCamera>,
    /// Log overlay diagnostics through the tracing macros.
    pub diagnostics: bool,
}

impl Default for WarplaneConfig {
    fn default() -> Self {
        Self {
            tuning: FlightTuning::default(),
            bindings: AxisBindings::default(),
            vehicle: VehicleSpawnConfig::default(),
            camera: Some(ChaseCamera::default()),
            diagnostics: false,
        }
    }
}

impl WarplaneConfig {
    /// Parses and validates a YAML document. Missing fields keep their defaults.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: WarplaneConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration from a YAML file.
    ///
    /// # Arguments
    /// * `path` - Path to the YAML configuration file.
    ///
    /// # Returns
    /// The validated configuration, or the I/O, parse or validation error.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tuning.validate()?;
        self.bindings.validate()?;
        self.vehicle.validate()
    }
}
