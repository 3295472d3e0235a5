use bevy::prelude::*;
use fpv_flyer::{
    components::{CrashCause, DroneState},
    resources::{FeatureToggles, MissionProgress, MissionStatus, Scenario, SimulationConfig},
};
use nalgebra::Vector3;

use crate::common::{
    create_research_config, create_single_target_scenario, create_test_config,
    create_wall_scenario, TestAppBuilder,
};

#[test]
fn test_target_collection_scores_once() {
    let mut app = TestAppBuilder::new()
        .with_config(create_research_config())
        .with_scenario(create_single_target_scenario(Vector3::new(100.0, 200.0, 0.0)))
        .build();
    app.press(KeyCode::Space);

    let log = app.run_steps_logged(30);

    assert_eq!(log.collections.len(), 1);
    assert_eq!(log.collections[0].target, 0);
    assert_eq!(log.collections[0].score, 10);
    assert_eq!(log.completions.len(), 1);
    assert_eq!(log.completions[0].score, 10);

    let progress = app.get_state::<MissionProgress>().unwrap();
    assert_eq!(progress.score, 10);
    assert_eq!(progress.status, MissionStatus::Completed);
    assert!(app.get_state::<Scenario>().unwrap().targets[0].is_collected());
}

#[test]
fn test_distant_target_needs_flying() {
    let mut app = TestAppBuilder::new()
        .with_config(create_research_config())
        .with_scenario(create_single_target_scenario(Vector3::new(100.0, 200.0, 300.0)))
        .build();

    // Hover-ish: no forward motion, nothing collected
    let log = app.run_steps_logged(20);
    assert!(log.collections.is_empty());
    assert_eq!(app.get_state::<MissionProgress>().unwrap().status, MissionStatus::InProgress);
}

#[test]
fn test_obstacle_crash() {
    let mut app = TestAppBuilder::new()
        .with_config(create_test_config())
        .with_scenario(create_wall_scenario())
        .build();

    let log = app.run_steps_logged(5);

    assert_eq!(log.crashes.len(), 1);
    assert_eq!(log.crashes[0].cause, CrashCause::Obstacle(0));
    assert!(app.query_single::<DroneState>().unwrap().crashed);
}

#[test]
fn test_obstacle_toggle() {
    let config = SimulationConfig {
        toggles: FeatureToggles {
            obstacle_collision: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut app = TestAppBuilder::new()
        .with_config(config)
        .with_scenario(create_wall_scenario())
        .build();

    let log = app.run_steps_logged(5);
    assert!(log.crashes.is_empty());
}

#[test]
fn test_time_limit_ends_mission() {
    let mut config = SimulationConfig {
        toggles: FeatureToggles::sandbox(),
        ..Default::default()
    };
    config.session.time_limit = 1.0;
    let mut app = TestAppBuilder::new().with_config(config).build();

    let log = app.run_steps_logged(90);

    assert_eq!(log.crashes.len(), 1);
    assert_eq!(log.crashes[0].cause, CrashCause::TimeLimit);
    assert!(log.completions.is_empty());
    assert!(app.query_single::<DroneState>().unwrap().crashed);
    assert_eq!(
        app.get_state::<MissionProgress>().unwrap().crash,
        Some(CrashCause::TimeLimit)
    );
}
