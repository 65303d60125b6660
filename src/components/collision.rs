use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Sent for every blocking contact found while sweeping a vehicle forward.
#[derive(Event, Debug, Clone, Copy)]
pub struct VehicleHit {
    /// Vehicle that was moving.
    pub vehicle: Entity,
    /// Obstacle that blocked it.
    pub other: Entity,
    /// Hull centre at the moment of contact.
    pub location: Vec3,
    /// Surface normal at the contact, pointing away from the obstacle.
    pub normal: Vec3,
}

/// Static obstacle shape. Shapes are placed at the entity's translation and
/// ignore its rotation.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    Sphere { radius: f32 },
    /// Axis-aligned box. A swept hull meets its edges and corners as rounded.
    Cuboid { half_extents: [f32; 3] },
    /// Infinite horizontal plane at a world height.
    Ground { height: f32 },
}

/// Spherical hull swept along the vehicle's path.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HullCollider {
    pub radius: f32,
    /// Contacts since spawn.
    #[serde(skip)]
    pub hit_count: u32,
}

impl Default for HullCollider {
    fn default() -> Self {
        Self::new(150.0)
    }
}

impl HullCollider {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            hit_count: 0,
        }
    }

    pub fn register_hit(&mut self) {
        self.hit_count = self.hit_count.saturating_add(1);
    }
}
