use bevy::prelude::*;

/// What a diagnostic message is about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiagnosticKind {
    Overheated { boost_time: f32 },
    CooledDown,
    /// An auto-level step; `roll` is the bank angle before the step.
    Leveling { roll: f32 },
}

/// Fire-and-forget message for an on-screen or log overlay. Nothing in the
/// flight model reads these.
#[derive(Event, Debug, Clone, Copy)]
pub struct FlightDiagnostic {
    pub vehicle: Entity,
    pub kind: DiagnosticKind,
}
