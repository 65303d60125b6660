use bevy::prelude::*;

use crate::components::Collider;

/// Distance kept between the hull and an obstacle after a blocked move.
pub const SKIN_WIDTH: f32 = 0.01;

const BOX_TOLERANCE: f32 = 1.0e-3;
const ROUNDED_ITERATIONS: usize = 48;

/// Earliest blocking contact along a swept move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Fraction of the displacement travelled before contact, in `[0, 1]`.
    pub time: f32,
    /// Surface normal pointing away from the obstacle.
    pub normal: Vec3,
}

/// Sweeps a sphere of `radius` from `start` along `displacement` against one
/// collider placed at `center`.
///
/// A hull that already overlaps the collider reports a hit at `t = 0`, but
/// only when the move pushes it further in; moving out is never blocked.
pub fn sweep_sphere(
    start: Vec3,
    displacement: Vec3,
    radius: f32,
    collider: &Collider,
    center: Vec3,
) -> Option<SweepHit> {
    match *collider {
        Collider::Sphere { radius: other } => {
            sweep_against_sphere(start, displacement, center, radius + other)
        }
        Collider::Cuboid { half_extents } => sweep_against_box(
            start,
            displacement,
            center,
            Vec3::from_array(half_extents),
            radius,
        ),
        Collider::Ground { height } => sweep_against_ground(start, displacement, height + radius),
    }
}

/// Ray against a sphere grown by the hull radius.
fn sweep_against_sphere(
    start: Vec3,
    displacement: Vec3,
    center: Vec3,
    combined_radius: f32,
) -> Option<SweepHit> {
    let offset = start - center;
    let c = offset.length_squared() - combined_radius * combined_radius;
    let b = offset.dot(displacement);

    if c <= 0.0 {
        // Starting inside.
        if b >= 0.0 {
            return None;
        }
        return Some(SweepHit {
            time: 0.0,
            normal: offset.try_normalize().unwrap_or(Vec3::Y),
        });
    }

    let a = displacement.length_squared();
    if a <= f32::EPSILON || b >= 0.0 {
        return None;
    }

    let discriminant = b * b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let time = (-b - discriminant.sqrt()) / a;
    if !(0.0..=1.0).contains(&time) {
        return None;
    }

    let contact = start + displacement * time;
    Some(SweepHit {
        time,
        normal: (contact - center).normalize_or_zero(),
    })
}

/// Sphere against an axis-aligned box.
///
/// A slab test against the box grown by `radius` finds the entry point. Entries
/// through a face are exact; entries near an edge or corner are refined against
/// the rounded shape, since the grown box is larger there.
fn sweep_against_box(
    start: Vec3,
    displacement: Vec3,
    center: Vec3,
    half_extents: Vec3,
    radius: f32,
) -> Option<SweepHit> {
    let grown = half_extents + Vec3::splat(radius);
    let min = center - grown;
    let max = center + grown;

    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut enter_axis = 0;

    for axis in 0..3 {
        let origin = start[axis];
        let delta = displacement[axis];

        if delta.abs() <= f32::EPSILON {
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let mut t0 = (min[axis] - origin) / delta;
        let mut t1 = (max[axis] - origin) / delta;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > t_enter {
            t_enter = t0;
            enter_axis = axis;
        }
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 || t_enter > 1.0 {
        return None;
    }

    let gap = |t: f32| box_distance(start + displacement * t, center, half_extents) - radius;

    if t_enter < 0.0 {
        if gap(0.0) > 0.0 {
            // Inside the grown box but clear of a rounded edge or corner.
            return sweep_rounded(
                start,
                displacement,
                center,
                half_extents,
                0.0,
                t_exit.min(1.0),
                gap,
            );
        }
        // Starting inside: block only moves deeper.
        let normal = overlap_normal(start - center, half_extents);
        if displacement.dot(normal) >= 0.0 {
            return None;
        }
        return Some(SweepHit { time: 0.0, normal });
    }

    let local = start + displacement * t_enter - center;
    let outside = (0..3)
        .filter(|&axis| local[axis].abs() > half_extents[axis] + BOX_TOLERANCE)
        .count();
    if outside > 1 {
        return sweep_rounded(
            start,
            displacement,
            center,
            half_extents,
            t_enter,
            t_exit.min(1.0),
            gap,
        );
    }

    let mut normal = Vec3::ZERO;
    normal[enter_axis] = -displacement[enter_axis].signum();
    Some(SweepHit {
        time: t_enter,
        normal,
    })
}

/// First time in `[lo, hi]` at which `gap` reaches zero, given `gap(lo) > 0`.
///
/// The distance to a convex shape is convex along a line, so the minimum is
/// bracketed by ternary search and the root by bisection.
fn sweep_rounded(
    start: Vec3,
    displacement: Vec3,
    center: Vec3,
    half_extents: Vec3,
    lo: f32,
    hi: f32,
    gap: impl Fn(f32) -> f32,
) -> Option<SweepHit> {
    let (mut a, mut b) = (lo, hi);
    for _ in 0..ROUNDED_ITERATIONS {
        let m1 = a + (b - a) / 3.0;
        let m2 = b - (b - a) / 3.0;
        if gap(m1) <= gap(m2) {
            b = m2;
        } else {
            a = m1;
        }
    }
    let closest_time = (a + b) * 0.5;
    if gap(closest_time) > 0.0 {
        return None;
    }

    let (mut outside, mut inside) = (lo, closest_time);
    for _ in 0..ROUNDED_ITERATIONS {
        let mid = (outside + inside) * 0.5;
        if gap(mid) > 0.0 {
            outside = mid;
        } else {
            inside = mid;
        }
    }

    let contact = start + displacement * outside;
    let normal = (contact - closest_point_on_box(contact, center, half_extents))
        .try_normalize()
        .unwrap_or_else(|| overlap_normal(contact - center, half_extents));
    Some(SweepHit {
        time: outside,
        normal,
    })
}

fn closest_point_on_box(point: Vec3, center: Vec3, half_extents: Vec3) -> Vec3 {
    center + (point - center).clamp(-half_extents, half_extents)
}

fn box_distance(point: Vec3, center: Vec3, half_extents: Vec3) -> f32 {
    point.distance(closest_point_on_box(point, center, half_extents))
}

/// Normal for a hull that already touches the box at `local` (relative to the
/// box centre): away from the box surface, or out of the nearest face when the
/// centre is inside.
fn overlap_normal(local: Vec3, half_extents: Vec3) -> Vec3 {
    if let Some(normal) = (local - local.clamp(-half_extents, half_extents)).try_normalize() {
        return normal;
    }
    let depth = half_extents - local.abs();
    let axis = if depth.x <= depth.y && depth.x <= depth.z {
        0
    } else if depth.y <= depth.z {
        1
    } else {
        2
    };
    let mut normal = Vec3::ZERO;
    normal[axis] = if local[axis] >= 0.0 { 1.0 } else { -1.0 };
    normal
}

/// Ray against the plane `y = surface`; solid below.
fn sweep_against_ground(start: Vec3, displacement: Vec3, surface: f32) -> Option<SweepHit> {
    if displacement.y >= 0.0 {
        return None;
    }

    let gap = start.y - surface;
    if gap <= 0.0 {
        return Some(SweepHit {
            time: 0.0,
            normal: Vec3::Y,
        });
    }

    let time = gap / -displacement.y;
    (time <= 1.0).then_some(SweepHit {
        time,
        normal: Vec3::Y,
    })
}

/// Position reached by a move that stops at `hit`, backed off by the skin
/// width without going behind the start.
pub fn blocked_position(start: Vec3, displacement: Vec3, hit: &SweepHit) -> Vec3 {
    let length = displacement.length();
    if length <= f32::EPSILON {
        return start;
    }
    let travelled = (hit.time * length - SKIN_WIDTH).max(0.0);
    start + displacement / length * travelled
}
