pub mod config;
mod input;

pub use config::{VehicleSpawnConfig, WarplaneConfig};
pub use input::{AxisBindings, AxisName, AxisValues, KeyAxisBinding};
