use bevy::prelude::*;

use crate::components::{Collider, HullCollider, VehicleHit, VehicleState};
use crate::systems::collisions::{blocked_position, sweep_sphere, SweepHit};
use crate::utils::Rotator;

/// Outcome of a swept move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepMove {
    /// Where the hull ends up.
    pub position: Vec3,
    /// First obstacle in the way, if any.
    pub hit: Option<(Entity, SweepHit)>,
}

/// Moves a hull of `radius` from `start` by `displacement`, stopping at the
/// earliest blocking obstacle.
pub fn sweep_move<'a>(
    start: Vec3,
    displacement: Vec3,
    radius: f32,
    obstacles: impl IntoIterator<Item = (Entity, &'a Collider, Vec3)>,
) -> SweepMove {
    let earliest = obstacles
        .into_iter()
        .filter_map(|(entity, collider, center)| {
            sweep_sphere(start, displacement, radius, collider, center).map(|hit| (entity, hit))
        })
        .min_by(|(_, a), (_, b)| a.time.total_cmp(&b.time));

    match earliest {
        Some((entity, hit)) => SweepMove {
            position: blocked_position(start, displacement, &hit),
            hit: Some((entity, hit)),
        },
        None => SweepMove {
            position: start + displacement,
            hit: None,
        },
    }
}

/// Local-space displacement for one frame: straight ahead along `-Z`.
pub fn forward_displacement(rotation: Quat, forward_speed: f32, dt: f32) -> Vec3 {
    rotation * (Vec3::NEG_Z * forward_speed * dt)
}

/// Applies the angular rates (deg/s) for one frame in the vehicle's local frame.
pub fn integrate_rotation(rotation: Quat, rates: Rotator, dt: f32) -> Quat {
    let delta = rates.scaled(dt);
    if delta.is_zero() {
        return rotation;
    }
    (rotation * delta.to_quat()).normalize()
}

pub fn flight_kinematics_system(
    time: Res<Time>,
    mut vehicles: Query<(Entity, &mut Transform, &VehicleState, Option<&HullCollider>)>,
    obstacles: Query<(Entity, &Collider, &Transform), Without<VehicleState>>,
    mut hits: EventWriter<VehicleHit>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (entity, mut transform, state, hull) in vehicles.iter_mut() {
        let radius = hull.map_or(0.0, |hull| hull.radius);
        let displacement = forward_displacement(transform.rotation, state.forward_speed, dt);

        let result = sweep_move(
            transform.translation,
            displacement,
            radius,
            obstacles
                .iter()
                .map(|(other, collider, obstacle)| (other, collider, obstacle.translation)),
        );
        transform.translation = result.position;

        if let Some((other, hit)) = result.hit {
            hits.send(VehicleHit {
                vehicle: entity,
                other,
                location: result.position,
                normal: hit.normal,
            });
        }

        transform.rotation = integrate_rotation(transform.rotation, state.angular_rates(), dt);
    }
}
