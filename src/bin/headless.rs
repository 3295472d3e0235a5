//! Flies a scripted mission without a window and prints the session summary as JSON.
//!
//! Usage: `fpv_headless [config.yaml]`. Without an argument the user config is
//! used when present, otherwise the built-in defaults.

use bevy::{
    app::{AppExit, ScheduleRunnerPlugin},
    log::LogPlugin,
    prelude::*,
    time::TimeUpdateStrategy,
};
use std::time::Duration;

use fpv_flyer::{
    components::{ControlAxes, ControlSource, DroneState, PlayerController},
    plugins::{FlightSet, FpvDronePlugin},
    resources::{MissionProgress, MissionStatus, Scenario, SimulationClock, SimulationConfig},
    systems::condition_controls,
    utils::{heading_vector, SimError},
    SessionSummary,
};

fn load_config() -> Result<SimulationConfig, SimError> {
    if let Some(path) = std::env::args().nth(1) {
        return Ok(SimulationConfig::load(path)?);
    }
    match SimulationConfig::default_path() {
        Some(path) if path.exists() => Ok(SimulationConfig::load(path)?),
        _ => Ok(SimulationConfig::default()),
    }
}

/// Steers toward the next uncollected target and holds its altitude.
fn autopilot_system(
    mut query: Query<(&mut ControlAxes, &DroneState), With<PlayerController>>,
    scenario: Res<Scenario>,
    config: Res<SimulationConfig>,
) {
    let Ok((mut axes, state)) = query.get_single_mut() else {
        return;
    };

    let raw = match scenario.next_target() {
        Some((_, target)) => {
            let offset = target.position - state.position;
            let forward = heading_vector(state.heading());
            // Positive cross product Y means the target lies to starboard
            let side = forward.cross(&offset.normalize()).y;
            // World +Y is down, so a target above needs more lift
            let climb = ((state.position.y - target.position.y) / 50.0).clamp(-1.0, 1.0);
            ControlAxes::new(0.2 + 0.4 * climb, side, 0.3, 0.0)
        }
        None => ControlAxes::new(0.33, 0.0, 0.0, 0.0),
    };
    *axes = condition_controls(raw, state.crashed, &config.toggles, &config.profile);
}

fn exit_when_finished(
    progress: Res<MissionProgress>,
    query: Query<&DroneState, With<PlayerController>>,
    scenario: Res<Scenario>,
    clock: Res<SimulationClock>,
    mut exit: EventWriter<AppExit>,
) {
    if progress.status == MissionStatus::InProgress {
        return;
    }
    if let Ok(state) = query.get_single() {
        let summary = SessionSummary::collect(state, &scenario, &progress, &clock);
        match summary.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => error!("Failed to serialise summary: {e}"),
        }
    }
    exit.send(AppExit::Success);
}

fn main() -> Result<(), SimError> {
    let mut config = load_config()?;
    config.session.control_source = ControlSource::External;
    let tick = Duration::from_secs_f64(1.0 / config.profile.reference_tick_rate);

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::ZERO)))
        .add_plugins(LogPlugin::default())
        .insert_resource(TimeUpdateStrategy::ManualDuration(tick))
        .add_plugins(FpvDronePlugin::new(config))
        .add_systems(FixedUpdate, autopilot_system.in_set(FlightSet::Input))
        .add_systems(Update, exit_when_finished)
        .run();

    Ok(())
}
