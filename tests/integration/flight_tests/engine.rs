use approx::assert_relative_eq;
use bevy::prelude::*;
use warplane::components::{
    DiagnosticKind, EngineHeat, FlightDiagnostic, FlightTuning, HeatState,
};

use crate::common::{assert_vehicle_state_valid, create_test_config, TestApp, TestAppBuilder};

fn diagnostics_this_frame(app: &TestApp) -> Vec<DiagnosticKind> {
    app.get_state::<Events<FlightDiagnostic>>()
        .map(|events| {
            events
                .iter_current_update_events()
                .map(|event| event.kind)
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_overheat_and_cooldown_cycle() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();
    let tuning = FlightTuning::default();

    app.press(KeyCode::KeyW);

    // Hold boost until the engine overheats.
    let mut overheated = false;
    for _ in 0..400 {
        app.run_frame();
        assert_vehicle_state_valid(&app.vehicle_state(), &tuning);
        if app.vehicle_state().over_heating {
            overheated = true;
            break;
        }
    }
    assert!(overheated, "Engine never overheated");
    assert!(app.vehicle_state().engine_boost_time <= tuning.overheat_threshold);
    assert!(diagnostics_this_frame(&app)
        .iter()
        .any(|kind| matches!(kind, DiagnosticKind::Overheated { .. })));

    // Boost stays locked out for the whole cooldown, even with W held.
    let hot_speed = app.vehicle_state().forward_speed;
    for _ in 0..189 {
        app.run_frame();
        let state = app.vehicle_state();
        assert_eq!(state.heat_state(), HeatState::Overheated);
        assert!(!state.engine_control);
    }
    assert!(app.vehicle_state().forward_speed < hot_speed);

    app.run_frame();
    assert_eq!(app.vehicle_state().heat_state(), HeatState::Cool);
    assert!(diagnostics_this_frame(&app).contains(&DiagnosticKind::CooledDown));

    // Boost is available again on the next input poll.
    app.run_frame();
    assert!(app.vehicle_state().engine_control);
}

#[test]
fn test_idle_engine_regenerates() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();

    app.press(KeyCode::KeyW);
    app.run_steps(50);
    assert_relative_eq!(app.vehicle_state().engine_boost_time, 15.0, epsilon = 1e-2);

    app.release(KeyCode::KeyW);
    app.run_steps(20);
    assert_relative_eq!(app.vehicle_state().engine_boost_time, 17.0, epsilon = 1e-2);
}

#[test]
fn test_long_frames_tick_several_times() {
    let mut app = TestAppBuilder::new()
        .with_config(create_test_config())
        .with_time_step(std::time::Duration::from_millis(200))
        .build();

    app.press(KeyCode::KeyW);
    app.run_steps(5);

    // One input poll per frame, two engine ticks per frame.
    let state = app.vehicle_state();
    assert_eq!(state.forward_speed, 10200.0);
    assert_relative_eq!(state.engine_boost_time, 19.0, epsilon = 1e-3);
}

#[test]
fn test_despawn_drops_engine_timer() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();
    let vehicle = app.vehicle_entity().unwrap();

    app.app.world_mut().entity_mut(vehicle).despawn_recursive();
    app.run_steps(3);

    let world = app.app.world_mut();
    let mut engines = world.query::<&EngineHeat>();
    assert_eq!(engines.iter(world).count(), 0);
}
