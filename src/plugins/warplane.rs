use bevy::prelude::*;
use std::path::Path;

use crate::components::{
    EngineHeat, FlightDiagnostic, HullCollider, PlayerController, VehicleHit, VehicleState,
};
use crate::plugins::{FlightSet, StartupSequencePlugin, StartupStage};
use crate::resources::{AxisValues, WarplaneConfig};
use crate::systems::{
    diagnostics_log_system, engine_boost_system, engine_heat_system, flight_kinematics_system,
    hit_deflection_system, poll_axes_system, right_rotation_system, slow_down_system,
};
use crate::utils::ConfigError;

/// Flight control for a single player vehicle.
///
/// Spawns the vehicle at startup and runs the input, engine, kinematics and
/// collision systems every frame in [`FlightSet`] order. Keyboard state is
/// read from `ButtonInput<KeyCode>`; without `InputPlugin` the resource is
/// still created so hosts and tests can press keys directly.
pub struct WarplanePlugin {
    config: WarplaneConfig,
}

impl WarplanePlugin {
    pub fn new(config: WarplaneConfig) -> Self {
        WarplanePlugin { config }
    }

    /// Builds the plugin from a YAML file, failing before any app setup.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Ok(Self::new(WarplaneConfig::from_yaml_file(path)?))
    }

    pub fn config(&self) -> &WarplaneConfig {
        &self.config
    }
}

impl Default for WarplanePlugin {
    fn default() -> Self {
        Self::new(WarplaneConfig::default())
    }
}

impl Plugin for WarplanePlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        if !app.is_plugin_added::<StartupSequencePlugin>() {
            app.add_plugins(StartupSequencePlugin);
        }

        app.init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(self.config.bindings.clone())
            .insert_resource(self.config.clone())
            .init_resource::<AxisValues>()
            .add_event::<VehicleHit>()
            .add_event::<FlightDiagnostic>()
            .add_systems(
                Startup,
                (move |commands: Commands| spawn_vehicle(commands, &config))
                    .in_set(StartupStage::SpawnVehicle),
            )
            .add_systems(
                Update,
                (
                    poll_axes_system.in_set(FlightSet::Input),
                    (engine_boost_system, slow_down_system, right_rotation_system)
                        .chain()
                        .in_set(FlightSet::Control),
                    engine_heat_system.in_set(FlightSet::Engine),
                    flight_kinematics_system.in_set(FlightSet::Kinematics),
                    hit_deflection_system.in_set(FlightSet::Response),
                ),
            );

        if self.config.diagnostics {
            app.add_systems(Update, diagnostics_log_system.in_set(FlightSet::Diagnostics));
        }
    }
}

/// Spawns the player vehicle, with its chase camera as a child when configured.
pub fn spawn_vehicle(mut commands: Commands, config: &WarplaneConfig) {
    let spawn = &config.vehicle;
    let tuning = config.tuning.clone();

    let mut vehicle = commands.spawn((
        Name::new(spawn.name.clone()),
        PlayerController,
        VehicleState::from_tuning(&tuning),
        EngineHeat::new(&tuning),
        HullCollider::new(spawn.hull_radius),
        spawn.transform(),
        tuning,
    ));

    if let Some(camera) = config.camera {
        vehicle.with_children(|parent| {
            parent.spawn((
                Name::new(format!("{} Camera", spawn.name)),
                camera,
                camera.local_transform(),
            ));
        });
    }

    info!(
        "Spawned {} at {:?}, hull radius {}",
        spawn.name, spawn.position, spawn.hull_radius
    );
}
