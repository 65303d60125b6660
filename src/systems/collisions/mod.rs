mod response;
mod sweep;

pub use response::{deflect_rotation, hit_deflection_system};
pub use sweep::{blocked_position, sweep_sphere, SweepHit, SKIN_WIDTH};
