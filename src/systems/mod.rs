mod collisions;
mod controller;
mod diagnostics;
mod engine;
mod kinematics;

pub use collisions::{
    blocked_position, deflect_rotation, hit_deflection_system, sweep_sphere, SweepHit, SKIN_WIDTH,
};
pub use controller::{
    engine_boost_input, engine_boost_system, poll_axes_system, right_rotation_input,
    right_rotation_system, slow_down_input, slow_down_system, TurnOutcome,
};
pub use diagnostics::diagnostics_log_system;
pub use engine::{
    advance_engine_heat, engine_heat_system, engine_heat_tick, HeatReport, HeatTransition,
};
pub use kinematics::{
    flight_kinematics_system, forward_displacement, integrate_rotation, sweep_move, SweepMove,
};
