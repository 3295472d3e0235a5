use bevy::{prelude::*, time::TimeUpdateStrategy};
use fpv_flyer::{
    components::{ControlAxes, ControlSource, CrashEvent, MissionCompletedEvent, PlayerController, TargetCollectedEvent},
    plugins::{insert_flight_resources, FpvDronePlugin},
    resources::{Scenario, SimulationConfig},
    systems::{
        collision_detection_system, drone_physics_system, emg_control_system, fresh_flight,
        keyboard_control_system, mission_status_system, record_crash_system, respawn_system,
        simulation_clock_system,
    },
};

use std::time::Duration;

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: SimulationConfig,
    scenario: Option<Scenario>,
    control_source: Option<ControlSource>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            scenario: None,
            control_source: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    pub fn with_control_source(mut self, source: ControlSource) -> Self {
        self.control_source = Some(source);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        insert_flight_resources(&mut app, &self.config);
        if let Some(scenario) = self.scenario {
            app.insert_resource(scenario);
        }
        if let Some(source) = self.control_source {
            app.insert_resource(source);
        }

        // One update is one physics tick
        app.add_systems(
            Update,
            (
                simulation_clock_system,
                keyboard_control_system,
                emg_control_system,
                drone_physics_system,
                collision_detection_system,
                mission_status_system,
                record_crash_system,
                respawn_system,
            )
                .chain(),
        );

        let (state, _) = fresh_flight(&self.config, 0);
        app.world_mut()
            .spawn((state, ControlAxes::neutral(), PlayerController::new()));

        TestApp { app }
    }

    /// Full plugin on a manual clock: every update advances one fixed tick,
    /// except the first, which only runs startup.
    pub fn build_with_plugin(self) -> TestApp {
        let step = Duration::from_secs_f64(1.0 / self.config.profile.reference_tick_rate);
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(step))
            .add_plugins(FpvDronePlugin::new(self.config));

        if let Some(scenario) = self.scenario {
            app.insert_resource(scenario);
        }
        if let Some(source) = self.control_source {
            app.insert_resource(source);
        }

        TestApp { app }
    }
}

/// Events gathered over several ticks
#[derive(Default)]
pub struct EventLog {
    pub crashes: Vec<CrashEvent>,
    pub collections: Vec<TargetCollectedEvent>,
    pub completions: Vec<MissionCompletedEvent>,
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn press(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    /// Release every key and forget edge state, as a new frame of input would.
    pub fn release_all(&mut self) {
        let mut input = self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release_all();
        input.clear();
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    /// Run `steps` ticks, draining events after every tick so none expire.
    pub fn run_steps_logged(&mut self, steps: usize) -> EventLog {
        let mut log = EventLog::default();
        for _ in 0..steps {
            self.app.update();
            log.crashes.extend(self.drain_crashes());
            log.collections.extend(self.drain_collections());
            log.completions.extend(self.drain_completions());
        }
        log
    }

    pub fn drain_crashes(&mut self) -> Vec<CrashEvent> {
        self.app
            .world_mut()
            .resource_mut::<Events<CrashEvent>>()
            .drain()
            .collect()
    }

    pub fn drain_collections(&mut self) -> Vec<TargetCollectedEvent> {
        self.app
            .world_mut()
            .resource_mut::<Events<TargetCollectedEvent>>()
            .drain()
            .collect()
    }

    pub fn drain_completions(&mut self) -> Vec<MissionCompletedEvent> {
        self.app
            .world_mut()
            .resource_mut::<Events<MissionCompletedEvent>>()
            .drain()
            .collect()
    }
}
