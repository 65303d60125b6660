use bevy::prelude::*;
use std::time::Duration;

use crate::components::{DiagnosticKind, EngineHeat, FlightDiagnostic, FlightTuning, VehicleState};

/// Result of a single engine tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatTransition {
    /// Nothing crossed the overheat threshold.
    Steady,
    /// Depletion reached the threshold; the cooldown must be (re)armed.
    Overheated,
}

/// One 0.1 s step of the boost resource.
///
/// Idle engines regenerate while below the regen ceiling. An engaged engine
/// spends boost, and spending down to the overheat threshold flips the
/// vehicle into forced cooldown.
pub fn engine_heat_tick(state: &mut VehicleState, tuning: &FlightTuning) -> HeatTransition {
    if !state.engine_control {
        if state.engine_boost_time < tuning.boost_regen_ceiling {
            state.engine_boost_time =
                tuning.clamp_boost(state.engine_boost_time + tuning.boost_step);
        }
        return HeatTransition::Steady;
    }

    if state.engine_boost_time >= tuning.boost_min {
        state.engine_boost_time = tuning.clamp_boost(state.engine_boost_time - tuning.boost_step);
        if state.engine_boost_time <= tuning.overheat_threshold {
            state.over_heating = true;
            return HeatTransition::Overheated;
        }
    }

    HeatTransition::Steady
}

/// What happened to one engine over a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeatReport {
    /// The cooldown expired and the engine is usable again.
    pub cooled_down: bool,
    /// Boost left when the engine went from cool to overheated.
    pub overheated_at: Option<f32>,
}

/// Advances the cooldown, then every engine tick that elapsed in `delta`.
pub fn advance_engine_heat(
    state: &mut VehicleState,
    heat: &mut EngineHeat,
    tuning: &FlightTuning,
    delta: Duration,
) -> HeatReport {
    let mut report = HeatReport::default();

    if heat.advance_cooldown(delta) {
        state.over_heating = false;
        report.cooled_down = true;
    }

    for _ in 0..heat.advance(delta) {
        let was_hot = state.over_heating;
        if engine_heat_tick(state, tuning) == HeatTransition::Overheated {
            heat.arm_cooldown(tuning.overheat_cooldown);
            if !was_hot {
                report.overheated_at = Some(state.engine_boost_time);
            }
        }
    }

    report
}

pub fn engine_heat_system(
    time: Res<Time>,
    mut query: Query<(Entity, &mut VehicleState, &mut EngineHeat, &FlightTuning)>,
    mut diagnostics: EventWriter<FlightDiagnostic>,
) {
    for (entity, mut state, mut heat, tuning) in query.iter_mut() {
        let report = advance_engine_heat(&mut state, &mut heat, tuning, time.delta());

        if report.cooled_down {
            diagnostics.send(FlightDiagnostic {
                vehicle: entity,
                kind: DiagnosticKind::CooledDown,
            });
        }
        if let Some(boost_time) = report.overheated_at {
            diagnostics.send(FlightDiagnostic {
                vehicle: entity,
                kind: DiagnosticKind::Overheated { boost_time },
            });
        }
    }
}
