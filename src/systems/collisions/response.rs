use bevy::prelude::*;

use crate::components::{FlightTuning, HullCollider, VehicleHit};
use crate::utils::orientation_from_direction;

/// Rotation after one hit: a fixed fraction of the way toward facing along
/// the surface normal.
pub fn deflect_rotation(rotation: Quat, normal: Vec3, factor: f32) -> Quat {
    rotation
        .slerp(orientation_from_direction(normal), factor)
        .normalize()
}

/// Nudges every vehicle that was hit this frame, once per hit event.
pub fn hit_deflection_system(
    mut hits: EventReader<VehicleHit>,
    mut vehicles: Query<(&mut Transform, &FlightTuning, Option<&mut HullCollider>)>,
) {
    for hit in hits.read() {
        let Ok((mut transform, tuning, hull)) = vehicles.get_mut(hit.vehicle) else {
            continue;
        };

        transform.rotation = deflect_rotation(transform.rotation, hit.normal, tuning.hit_deflection);
        if let Some(mut hull) = hull {
            hull.register_hit();
        }

        debug!(
            "Vehicle {:?} hit {:?} at {:?}, normal {:?}",
            hit.vehicle, hit.other, hit.location, hit.normal
        );
    }
}
