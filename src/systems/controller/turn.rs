use bevy::prelude::*;

use crate::components::{
    camera_world_rotation, local_camera_rotation, ChaseCamera, DiagnosticKind, FlightDiagnostic,
    FlightTuning, PlayerController, VehicleState,
};
use crate::resources::AxisValues;
use crate::utils::Rotator;

/// Orientation changes requested by one steering call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TurnOutcome {
    /// New vehicle orientation, if it changed.
    pub vehicle: Option<Rotator>,
    /// New camera world orientation, if it changed.
    pub camera: Option<Rotator>,
    /// Bank angle before an auto-level step, if one happened.
    pub leveled_from: Option<f32>,
}

/// Handler for the `RightRotation` axis.
///
/// Steering is discrete: `1` banks right, `-1` banks left, `0` levels out.
/// Any other value leaves both orientations untouched.
///
/// # Arguments
/// * `val` - Axis value.
/// * `vehicle` - Current vehicle orientation.
/// * `camera` - Current world orientation of the chase camera.
/// * `tuning` - Roll limit, step sizes and camera drift.
pub fn right_rotation_input(
    val: f32,
    vehicle: Rotator,
    camera: Rotator,
    tuning: &FlightTuning,
) -> TurnOutcome {
    if val == 1.0 || val == -1.0 {
        let within_limit = if val > 0.0 {
            vehicle.roll <= tuning.roll_limit
        } else {
            vehicle.roll >= -tuning.roll_limit
        };
        if !within_limit {
            return TurnOutcome::default();
        }

        let mut vehicle = vehicle;
        vehicle.yaw += val * tuning.yaw_per_roll_step;
        vehicle.roll += val * tuning.roll_step;

        // The camera never banks with the vehicle.
        let mut camera = camera;
        camera.roll = 0.0;

        return TurnOutcome {
            vehicle: Some(vehicle),
            camera: Some(camera),
            leveled_from: None,
        };
    }

    if val == 0.0 && vehicle.roll.abs() > tuning.level_threshold {
        let direction = vehicle.roll.signum();

        let mut leveled = vehicle;
        leveled.roll -= direction * tuning.roll_step;

        let mut camera = camera;
        camera.roll = 0.0;
        camera.yaw += direction * tuning.camera_drift;

        return TurnOutcome {
            vehicle: Some(leveled),
            camera: Some(camera),
            leveled_from: Some(vehicle.roll),
        };
    }

    TurnOutcome::default()
}

pub fn right_rotation_system(
    axes: Res<AxisValues>,
    mut vehicles: Query<
        (Entity, &mut Transform, &FlightTuning, Option<&Children>),
        (With<PlayerController>, With<VehicleState>),
    >,
    mut cameras: Query<&mut Transform, (With<ChaseCamera>, Without<VehicleState>)>,
    mut diagnostics: EventWriter<FlightDiagnostic>,
) {
    for (entity, mut transform, tuning, children) in vehicles.iter_mut() {
        let camera_entity = children.and_then(|children| {
            children
                .iter()
                .copied()
                .find(|child| cameras.contains(*child))
        });

        let vehicle_rotation = transform.rotation;
        let camera_rotation = camera_entity
            .and_then(|camera| cameras.get(camera).ok())
            .map(|camera| camera_world_rotation(vehicle_rotation, camera.rotation))
            .unwrap_or(vehicle_rotation);

        let outcome = right_rotation_input(
            axes.right_rotation,
            Rotator::from_quat(vehicle_rotation),
            Rotator::from_quat(camera_rotation),
            tuning,
        );

        if let Some(vehicle) = outcome.vehicle {
            transform.rotation = vehicle.to_quat();
        }

        if let (Some(camera), Some(camera_entity)) = (outcome.camera, camera_entity) {
            if let Ok(mut camera_transform) = cameras.get_mut(camera_entity) {
                camera_transform.rotation =
                    local_camera_rotation(transform.rotation, camera.to_quat());
            }
        }

        if let Some(roll) = outcome.leveled_from {
            diagnostics.send(FlightDiagnostic {
                vehicle: entity,
                kind: DiagnosticKind::Leveling { roll },
            });
        }
    }
}
