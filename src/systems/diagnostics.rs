use bevy::prelude::*;

use crate::components::{DiagnosticKind, FlightDiagnostic};

/// Writes flight diagnostics to the log. Enabled with `diagnostics: true`.
pub fn diagnostics_log_system(mut events: EventReader<FlightDiagnostic>) {
    for event in events.read() {
        match event.kind {
            DiagnosticKind::Overheated { boost_time } => {
                warn!(
                    "Vehicle {:?} overheated, boost left {:.1}",
                    event.vehicle, boost_time
                );
            }
            DiagnosticKind::CooledDown => {
                info!("Vehicle {:?} engine cooled down", event.vehicle);
            }
            DiagnosticKind::Leveling { roll } => {
                debug!("Vehicle {:?} leveling from roll {:.1}", event.vehicle, roll);
            }
        }
    }
}
