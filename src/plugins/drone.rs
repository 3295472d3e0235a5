use bevy::prelude::*;

use crate::components::{
    ControlAxes, CrashEvent, MissionCompletedEvent, PlayerController, TargetCollectedEvent,
};
use crate::resources::{
    CameraProjector, MissionProgress, SimulationClock, SimulationConfig,
};
use crate::systems::{
    collision_detection_system, drone_physics_system, emg_control_system, fresh_flight,
    keyboard_control_system, mission_status_system, record_crash_system, respawn_system,
    simulation_clock_system, telemetry_log_system, CollisionDetector, FlightIntegrator,
};

/// Per-tick stages, run in this order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Physics,
    Collision,
    Mission,
}

/// Everything needed to fly one drone: resources, events, the player entity and
/// the fixed-rate flight pipeline.
pub struct FpvDronePlugin {
    config: SimulationConfig,
}

impl Default for FpvDronePlugin {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl FpvDronePlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }
}

/// Insert the resources and events the flight systems read.
pub fn insert_flight_resources(app: &mut App, config: &SimulationConfig) {
    let (_, scenario) = fresh_flight(config, 0);
    let clock = SimulationClock::new(1.0 / config.profile.reference_tick_rate);

    app.insert_resource(config.clone())
        .insert_resource(FlightIntegrator::from_config(config))
        .insert_resource(CollisionDetector::from_config(config))
        .insert_resource(CameraProjector::from_render(&config.render))
        .insert_resource(config.session.control_source)
        .insert_resource(scenario)
        .insert_resource(clock)
        .init_resource::<MissionProgress>()
        .init_resource::<ButtonInput<KeyCode>>()
        .add_event::<CrashEvent>()
        .add_event::<TargetCollectedEvent>()
        .add_event::<MissionCompletedEvent>();
}

/// Startup system spawning the player drone at the configured spawn point.
pub fn spawn_player_drone(mut commands: Commands, config: Res<SimulationConfig>) {
    let (state, _) = fresh_flight(&config, 0);
    info!(
        "Spawning drone at {:?}, limits {:.0} km/h / {:.1} km",
        state.position,
        state.limits.max_speed_kmh(),
        state.limits.max_range_km()
    );
    commands.spawn((
        state,
        ControlAxes::neutral(),
        PlayerController::new(),
        Name::new("FPV Drone"),
    ));
}

impl Plugin for FpvDronePlugin {
    fn build(&self, app: &mut App) {
        insert_flight_resources(app, &self.config);

        app.configure_sets(
            FixedUpdate,
            (
                FlightSet::Input,
                FlightSet::Physics,
                FlightSet::Collision,
                FlightSet::Mission,
            )
                .chain(),
        )
        .add_systems(Startup, spawn_player_drone)
        .add_systems(
            FixedUpdate,
            (
                (
                    simulation_clock_system,
                    keyboard_control_system,
                    emg_control_system,
                )
                    .chain()
                    .in_set(FlightSet::Input),
                drone_physics_system.in_set(FlightSet::Physics),
                collision_detection_system.in_set(FlightSet::Collision),
                (
                    mission_status_system,
                    record_crash_system,
                    telemetry_log_system,
                )
                    .chain()
                    .in_set(FlightSet::Mission),
            ),
        )
        .add_systems(Update, respawn_system);

        app.insert_resource(Time::<Fixed>::from_hz(self.config.profile.reference_tick_rate));
    }
}
