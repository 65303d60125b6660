mod heat;

pub use heat::{
    advance_engine_heat, engine_heat_system, engine_heat_tick, HeatReport, HeatTransition,
};
