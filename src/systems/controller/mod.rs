mod axes;
mod speed;
mod turn;

pub use axes::poll_axes_system;
pub use speed::{engine_boost_input, engine_boost_system, slow_down_input, slow_down_system};
pub use turn::{right_rotation_input, right_rotation_system, TurnOutcome};
