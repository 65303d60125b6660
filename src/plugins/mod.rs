mod staging;
mod warplane;

pub use staging::{FlightSet, StartupSequencePlugin, StartupStage};
pub use warplane::{spawn_vehicle, WarplanePlugin};
