mod flight;

pub use flight::{
    flight_kinematics_system, forward_displacement, integrate_rotation, sweep_move, SweepMove,
};
