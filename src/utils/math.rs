use bevy::math::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Orientation expressed as pitch, yaw and roll in degrees.
///
/// Signs follow the cockpit view: positive pitch raises the nose, positive yaw
/// turns right, positive roll drops the right wing. Rotations are applied yaw
/// first (world up), then pitch, then roll about the vehicle's forward axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Decompose a Bevy rotation (`-Z` forward, `+Y` up).
    pub fn from_quat(rotation: Quat) -> Self {
        let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
        Self {
            pitch: pitch.to_degrees(),
            yaw: -yaw.to_degrees(),
            roll: -roll.to_degrees(),
        }
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            -self.yaw.to_radians(),
            self.pitch.to_radians(),
            -self.roll.to_radians(),
        )
    }

    /// Per-component scale, used to turn angular rates into a frame delta.
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            pitch: self.pitch * factor,
            yaw: self.yaw * factor,
            roll: self.roll * factor,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.pitch == 0.0 && self.yaw == 0.0 && self.roll == 0.0
    }
}

/// Rotation whose forward axis points along `direction`, with no roll.
///
/// A zero direction yields the identity rotation.
pub fn orientation_from_direction(direction: Vec3) -> Quat {
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    // Straight up or down has no heading; keep yaw at zero.
    let yaw = if dir.x == 0.0 && dir.z == 0.0 {
        0.0
    } else {
        (-dir.x).atan2(-dir.z)
    };
    let pitch = dir.y.clamp(-1.0, 1.0).asin();
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
}

/// Timer period from a tunable in seconds, rounded to whole microseconds so
/// that decimal periods such as 0.1 s divide frame steps exactly.
pub fn period_duration(seconds: f32) -> Duration {
    Duration::from_micros((f64::from(seconds) * 1.0e6).round().max(0.0) as u64)
}
