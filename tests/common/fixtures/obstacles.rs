use bevy::prelude::*;
use warplane::components::Collider;

/// Wide wall facing the vehicle, 3000 units ahead of the default spawn.
pub fn wall_ahead() -> (Collider, Vec3) {
    (
        Collider::Cuboid {
            half_extents: [2000.0, 2000.0, 100.0],
        },
        Vec3::new(0.0, 5000.0, -3000.0),
    )
}

/// Ground 1000 units below the default spawn.
pub fn ground_below() -> (Collider, Vec3) {
    (Collider::Ground { height: 4000.0 }, Vec3::ZERO)
}

/// Sphere sitting on the default flight path.
pub fn balloon_ahead(distance: f32, radius: f32) -> (Collider, Vec3) {
    (
        Collider::Sphere { radius },
        Vec3::new(0.0, 5000.0, -distance),
    )
}
