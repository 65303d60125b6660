pub mod camera;
pub mod collision;
pub mod diagnostics;
pub mod engine;
pub mod vehicle;

pub use camera::{camera_world_rotation, local_camera_rotation, ChaseCamera};
pub use collision::{Collider, HullCollider, VehicleHit};
pub use diagnostics::{DiagnosticKind, FlightDiagnostic};
pub use engine::EngineHeat;
pub use vehicle::{FlightTuning, HeatState, PlayerController, VehicleState};
