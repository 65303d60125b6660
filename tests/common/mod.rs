mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_camera_level, assert_rotator_eq, assert_vehicle_state_valid};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
