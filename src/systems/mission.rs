use bevy::prelude::*;

use crate::components::{CrashEvent, DroneState, MissionCompletedEvent, PlayerController};
use crate::resources::{MissionProgress, MissionStatus, Scenario, SimulationClock, SimulationConfig};
use crate::utils::RngManager;

/// A new drone state and a new course for flight number `attempt`.
///
/// Both are built together so a reset never pairs a fresh drone with a used course.
pub fn fresh_flight(config: &SimulationConfig, attempt: u64) -> (DroneState, Scenario) {
    let session = &config.session;
    let spawn = RngManager::new(session.seed).jitter_spawn(
        session.spawn_for(&config.toggles),
        session.spawn_jitter,
        attempt,
    );
    let state = DroneState::spawn(spawn, session.max_speed_kmh, session.max_range_km);
    let scenario = Scenario::from_preset(session.scenario, &config.toggles, session.time_limit);
    (state, scenario)
}

pub fn simulation_clock_system(mut clock: ResMut<SimulationClock>) {
    clock.advance();
}

/// Applies mission rules after collisions have been resolved.
pub fn mission_status_system(
    mut query: Query<(Entity, &mut DroneState), With<PlayerController>>,
    scenario: Res<Scenario>,
    clock: Res<SimulationClock>,
    config: Res<SimulationConfig>,
    mut progress: ResMut<MissionProgress>,
    mut crash_events: EventWriter<CrashEvent>,
    mut completed_events: EventWriter<MissionCompletedEvent>,
) {
    if progress.status != MissionStatus::InProgress {
        return;
    }

    for (entity, mut state) in query.iter_mut() {
        let status = scenario.evaluate(&state, clock.elapsed_seconds(), &config.toggles);

        if let MissionStatus::Failed(cause) = status {
            state.crashed = true;
            warn!("Mission failed for {:?}: {:?}", entity, cause);
            crash_events.send(CrashEvent { entity, cause });
        }

        if progress.record_status(status) {
            info!(
                "Mission complete in {:.1}s with score {}",
                clock.elapsed_seconds(),
                progress.score
            );
            completed_events.send(MissionCompletedEvent {
                entity,
                score: progress.score,
            });
        }
    }
}

/// Keeps the first crash cause of each flight, whichever system reported it.
pub fn record_crash_system(mut events: EventReader<CrashEvent>, mut progress: ResMut<MissionProgress>) {
    for event in events.read() {
        progress.record_crash(event.cause);
    }
}

/// R resets at any time; Space resets once the drone is down.
pub fn respawn_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut DroneState, With<PlayerController>>,
    config: Res<SimulationConfig>,
    mut scenario: ResMut<Scenario>,
    mut clock: ResMut<SimulationClock>,
    mut progress: ResMut<MissionProgress>,
) {
    let Ok(mut state) = query.get_single_mut() else {
        return;
    };

    let requested = keyboard.just_pressed(KeyCode::KeyR)
        || (state.crashed && keyboard.just_pressed(KeyCode::Space));
    if !requested {
        return;
    }

    progress.restart();
    let (fresh_state, fresh_scenario) = fresh_flight(&config, progress.respawns as u64);
    *state = fresh_state;
    *scenario = fresh_scenario;
    clock.reset();
    info!("Respawned at {:?} (flight {})", state.position, progress.respawns + 1);
}

/// Periodic flight log at debug level.
pub fn telemetry_log_system(
    query: Query<&DroneState, With<PlayerController>>,
    clock: Res<SimulationClock>,
    scenario: Res<Scenario>,
) {
    if clock.ticks() % 60 != 0 {
        return;
    }
    for state in query.iter() {
        debug!(
            "t={:.1}s pos=({:.1}, {:.1}, {:.1}) speed={:.1} km/h battery={:.1}% targets {}/{}",
            clock.elapsed_seconds(),
            state.position.x,
            state.position.y,
            state.position.z,
            state.speed_kmh(),
            state.battery,
            scenario.collected_count(),
            scenario.targets.len()
        );
    }
}
