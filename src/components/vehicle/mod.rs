pub mod config;
pub mod state;

use bevy::prelude::*;

pub use config::FlightTuning;
pub use state::{HeatState, VehicleState};

/// Marks the vehicle driven by the local input axes.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PlayerController;
