use fpv_flyer::{
    components::{ControlAxes, CrashCause, Target},
    resources::{FeatureToggles, MissionStatus, ScenarioPreset, SimulationConfig},
    systems::{CollisionDetector, FlightIntegrator},
    FlightSession,
};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use crate::common::{
    assert_drone_state_valid, create_grounded_state, create_spawn_state, TEST_DT,
};

#[test]
fn test_first_tick_at_full_throttle() {
    let integrator = FlightIntegrator::default();
    let next = integrator.step(&create_spawn_state(), ControlAxes::new(1.0, 0.0, 0.0, 0.0), TEST_DT);

    assert!(next.position.y < 300.0);
    assert!(next.velocity.z > 0.0);
    assert!(next.battery < 100.0);
    assert!(!next.crashed);
    assert_drone_state_valid(&next);
}

#[test]
fn test_grounded_drone_crashes_with_any_input() {
    let integrator = FlightIntegrator::default();
    for controls in [
        ControlAxes::neutral(),
        ControlAxes::new(1.0, 0.0, 0.0, 0.0),
        ControlAxes::new(1.0, -1.0, 1.0, 1.0),
    ] {
        let next = integrator.step(&create_grounded_state(), controls, TEST_DT);
        assert!(next.crashed);
        assert_eq!(next.position.y, 590.0);
    }
}

#[test]
fn test_nearby_target_collected_once() {
    let detector = CollisionDetector::default();
    let state = create_spawn_state();
    let mut targets = vec![Target::waypoint(110.0, 300.0, 0.0, 20.0)];

    assert_eq!(detector.check_target_collection(&state, &mut targets, None), Some(0));
    assert_eq!(detector.check_target_collection(&state, &mut targets, None), None);
}

#[test]
fn test_long_flight_keeps_invariants() {
    let config = SimulationConfig {
        toggles: FeatureToggles::sandbox(),
        ..Default::default()
    };
    let mut session = FlightSession::new(config).unwrap();

    let pattern = [
        ControlAxes::new(1.0, 0.0, 0.0, 0.0),
        ControlAxes::new(0.6, 0.8, 0.2, -0.4),
        ControlAxes::new(0.3, -0.5, -0.6, 1.0),
        ControlAxes::new(0.9, 0.0, 1.0, 0.0),
    ];
    let mut battery = session.state().battery;
    let mut distance = 0.0;
    for i in 0..3000 {
        session.tick(pattern[(i / 120) % pattern.len()], TEST_DT);
        let state = session.state();
        assert_drone_state_valid(state);
        assert!(state.battery <= battery);
        assert!(state.total_distance_traveled >= distance);
        battery = state.battery;
        distance = state.total_distance_traveled;
    }
}

#[test]
fn test_identical_inputs_are_deterministic() {
    let run = || {
        let mut session = FlightSession::new(SimulationConfig::default()).unwrap();
        for i in 0..400 {
            let yaw = if i % 100 < 50 { 0.5 } else { -0.5 };
            session.tick(ControlAxes::new(0.7, yaw, 0.3, 0.1), TEST_DT);
        }
        session.state().clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_session_from_saved_config() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SimulationConfig::default();
    config.session = config.session.with_scenario(ScenarioPreset::Endurance);
    config.session.spawn_position = Vector3::new(0.0, 250.0, 0.0);
    let file = NamedTempFile::new()?;
    config.save(file.path())?;

    let session = FlightSession::new(SimulationConfig::load(file.path())?)?;
    assert_eq!(session.scenario().name, "endurance");
    assert_eq!(session.scenario().targets.len(), 7);
    assert_eq!(session.state().position, Vector3::new(0.0, 250.0, 0.0));
    Ok(())
}

#[test]
fn test_battery_depletion_fails_mission() {
    let mut config = SimulationConfig::default();
    config.profile.battery_endurance_min = 0.05;
    config.toggles.ground_collision = false;
    let mut session = FlightSession::new(config).unwrap();

    let mut crash = None;
    for _ in 0..600 {
        let report = session.tick(ControlAxes::new(0.35, 0.0, 0.0, 0.0), TEST_DT);
        if report.crash.is_some() {
            crash = report.crash;
            break;
        }
    }
    assert_eq!(crash, Some(CrashCause::BatteryDepleted));
    assert_eq!(session.state().battery, 0.0);
    assert_eq!(session.progress().status, MissionStatus::Failed(CrashCause::BatteryDepleted));
}
