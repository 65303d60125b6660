use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildScene,
    SpawnVehicle,
}

/// Per-frame ordering of the flight model.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Control,
    Engine,
    Kinematics,
    Response,
    Diagnostics,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (StartupStage::BuildScene, StartupStage::SpawnVehicle).chain(),
        )
        .configure_sets(
            Update,
            (
                FlightSet::Input,
                FlightSet::Control,
                FlightSet::Engine,
                FlightSet::Kinematics,
                FlightSet::Response,
                FlightSet::Diagnostics,
            )
                .chain(),
        );
    }
}
