use bevy::prelude::*;
use fpv_flyer::{
    components::{CrashCause, DroneState},
    resources::{MissionProgress, MissionStatus, SimulationClock},
};
use nalgebra::Vector3;

use crate::common::{assert_drone_state_valid, assert_position_eq, create_test_config, TestAppBuilder};

#[test]
fn test_plugin_spawns_drone_on_startup() {
    let mut app = TestAppBuilder::new().build_with_plugin();
    assert!(app.query_single::<DroneState>().is_none());

    app.run_frame();

    let state = app.query_single::<DroneState>().expect("drone not spawned");
    assert_position_eq(&state.position, &Vector3::new(100.0, 300.0, 0.0), 1e-9);
    let name = app.query_single::<Name>().unwrap();
    assert_eq!(name.as_str(), "FPV Drone");
    // Startup frame carries no elapsed time
    assert_eq!(app.get_state::<SimulationClock>().unwrap().ticks(), 0);
}

#[test]
fn test_plugin_climbs_at_fixed_rate() {
    let mut app = TestAppBuilder::new()
        .with_config(create_test_config())
        .build_with_plugin();
    app.run_frame();
    app.press(KeyCode::Space);

    app.run_steps(60);

    let ticks = app.get_state::<SimulationClock>().unwrap().ticks();
    assert!((55..=61).contains(&ticks), "expected one tick per frame, got {}", ticks);

    let state = app.query_single::<DroneState>().unwrap();
    assert_drone_state_valid(state);
    assert!(state.position.y < 300.0, "expected climb, y = {}", state.position.y);
    assert!(!state.crashed);
}

#[test]
fn test_plugin_crashes_then_respawns() {
    let mut app = TestAppBuilder::new().build_with_plugin();
    app.run_steps(900);

    let state = app.query_single::<DroneState>().unwrap();
    assert!(state.crashed);
    assert_eq!(state.position.y, 590.0);
    let progress = app.get_state::<MissionProgress>().unwrap();
    assert_eq!(progress.status, MissionStatus::Failed(CrashCause::Ground));

    // Respawn runs in Update, after this frame's fixed tick
    app.press(KeyCode::Space);
    app.run_frame();
    app.release_all();

    let state = app.query_single::<DroneState>().unwrap();
    assert!(!state.crashed);
    assert_position_eq(&state.position, &Vector3::new(100.0, 300.0, 0.0), 1e-9);
    let progress = app.get_state::<MissionProgress>().unwrap();
    assert_eq!(progress.respawns, 1);
    assert_eq!(progress.status, MissionStatus::InProgress);
}
