use bevy::prelude::*;
use fpv_flyer::{
    components::{CrashCause, DroneState},
    resources::{FeatureToggles, MissionProgress, MissionStatus, Scenario, SimulationClock, SimulationConfig},
};
use nalgebra::Vector3;

use crate::common::{assert_drone_state_valid, assert_position_eq, create_test_config, TestAppBuilder};

#[test]
fn test_space_climbs() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();
    app.press(KeyCode::Space);

    app.run_steps(60);

    let state = app.query_single::<DroneState>().expect("drone not spawned");
    assert_drone_state_valid(state);
    assert!(state.position.y < 300.0, "expected climb, y = {}", state.position.y);
    assert!(state.position.z > 0.0);
    assert!(!state.crashed);
    assert!(state.battery < 100.0);
}

#[test]
fn test_neutral_sticks_fall_to_ground() {
    let mut app = TestAppBuilder::new().build();

    let log = app.run_steps_logged(600);

    assert_eq!(log.crashes.len(), 1);
    assert_eq!(log.crashes[0].cause, CrashCause::Ground);

    let state = app.query_single::<DroneState>().unwrap();
    assert!(state.crashed);
    assert_eq!(state.position.y, 590.0);

    let progress = app.get_state::<MissionProgress>().unwrap();
    assert_eq!(progress.status, MissionStatus::Failed(CrashCause::Ground));
}

#[test]
fn test_crashed_drone_stays_put() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(600);
    let crashed = app.query_single::<DroneState>().unwrap().clone();
    assert!(crashed.crashed);

    app.press(KeyCode::KeyW);
    app.run_steps(30);
    let later = app.query_single::<DroneState>().unwrap();
    assert_eq!(*later, crashed);
}

#[test]
fn test_space_respawns_after_crash() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(600);
    assert!(app.query_single::<DroneState>().unwrap().crashed);

    app.press(KeyCode::Space);
    app.run_frame();
    app.release_all();

    let state = app.query_single::<DroneState>().unwrap();
    assert!(!state.crashed);
    assert_position_eq(&state.position, &Vector3::new(100.0, 300.0, 0.0), 1e-9);
    assert_eq!(state.battery, 100.0);

    let progress = app.get_state::<MissionProgress>().unwrap();
    assert_eq!(progress.respawns, 1);
    assert_eq!(progress.status, MissionStatus::InProgress);
    assert_eq!(app.get_state::<SimulationClock>().unwrap().elapsed_seconds(), 0.0);
}

#[test]
fn test_reset_key_restores_course() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(10);
    if let Some(mut scenario) = app.get_state_mut::<Scenario>() {
        scenario.targets[0].collect();
    }

    app.press(KeyCode::KeyR);
    app.run_frame();
    app.release_all();

    let scenario = app.get_state::<Scenario>().unwrap();
    assert_eq!(scenario.collected_count(), 0);
    let state = app.query_single::<DroneState>().unwrap();
    assert_eq!(state.total_distance_traveled, 0.0);
}

#[test]
fn test_ground_clamp_without_collision() {
    let config = SimulationConfig {
        toggles: FeatureToggles::sandbox(),
        ..Default::default()
    };
    let mut app = TestAppBuilder::new().with_config(config).build();

    let log = app.run_steps_logged(900);

    assert!(log.crashes.is_empty());
    let state = app.query_single::<DroneState>().unwrap();
    assert_drone_state_valid(state);
    assert!(!state.crashed);
    assert_eq!(state.position.y, 590.0);
    // Sandbox spawns low
    assert_eq!(state.start_position.y, 200.0);
}
