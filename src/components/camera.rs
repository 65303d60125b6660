use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Chase camera carried on a spring arm behind the vehicle.
///
/// The camera entity is a child of the vehicle, so its `Transform` is relative
/// to the vehicle. The flight controls think in world rotations; use
/// [`camera_world_rotation`] and [`local_camera_rotation`] to convert.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseCamera {
    /// Distance behind the vehicle.
    pub arm_length: f32,
    /// Offset at the end of the arm, in vehicle space.
    pub socket_offset: [f32; 3],
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            arm_length: 500.0,
            socket_offset: [0.0, 60.0, 0.0],
        }
    }
}

impl ChaseCamera {
    /// Camera position relative to the vehicle.
    pub fn local_translation(&self) -> Vec3 {
        Vec3::from_array(self.socket_offset) + Vec3::Z * self.arm_length
    }

    pub fn local_transform(&self) -> Transform {
        Transform::from_translation(self.local_translation())
    }
}

/// World rotation of a camera parented to a vehicle with `vehicle_rotation`.
pub fn camera_world_rotation(vehicle_rotation: Quat, camera_local: Quat) -> Quat {
    vehicle_rotation * camera_local
}

/// Local rotation that puts a child camera at `world_rotation`.
pub fn local_camera_rotation(vehicle_rotation: Quat, world_rotation: Quat) -> Quat {
    (vehicle_rotation.inverse() * world_rotation).normalize()
}
