//! Bevy-free flight loop for tools, scripted runs and tests.

use nalgebra::Vector3;
use serde::Serialize;
use uuid::Uuid;

use crate::components::{ControlAxes, CrashCause, DroneState, HudTelemetry};
use crate::resources::{
    MissionProgress, MissionStatus, Scenario, ScreenPoint, SimulationClock, SimulationConfig,
};
use crate::systems::{condition_controls, fresh_flight, CollisionDetector, FlightIntegrator};
use crate::utils::SimError;

/// What happened during one [`FlightSession::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Set on the tick the flight ended.
    pub crash: Option<CrashCause>,
    pub collected: Option<usize>,
    /// True only on the tick the last target was collected.
    pub completed: bool,
    pub status: MissionStatus,
}

/// End-of-flight record, written out as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    /// RFC 3339 start time
    pub started_at: String,
    pub scenario: String,
    pub status: MissionStatus,
    pub crash: Option<CrashCause>,
    pub score: u32,
    pub targets_collected: usize,
    pub targets_total: usize,
    pub flight_time_s: f64,
    pub max_speed_kmh: f64,
    pub distance_km: f64,
    pub battery_remaining: f64,
    pub respawns: u32,
}

impl SessionSummary {
    pub fn collect(
        state: &DroneState,
        scenario: &Scenario,
        progress: &MissionProgress,
        clock: &SimulationClock,
    ) -> Self {
        Self {
            session_id: progress.session_id,
            started_at: progress.started_at.to_rfc3339(),
            scenario: scenario.name.clone(),
            status: progress.status,
            crash: progress.crash,
            score: progress.score,
            targets_collected: scenario.collected_count(),
            targets_total: scenario.targets.len(),
            flight_time_s: clock.elapsed_seconds(),
            max_speed_kmh: state.max_speed_achieved,
            distance_km: state.total_distance_km(),
            battery_remaining: state.battery,
            respawns: progress.respawns,
        }
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One pilot flying one course, advanced explicitly by the caller.
///
/// Each tick runs the same pipeline as the ECS schedule: control conditioning,
/// integration, collisions, then mission rules.
#[derive(Debug, Clone)]
pub struct FlightSession {
    config: SimulationConfig,
    integrator: FlightIntegrator,
    detector: CollisionDetector,
    state: DroneState,
    scenario: Scenario,
    clock: SimulationClock,
    progress: MissionProgress,
}

impl FlightSession {
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        let (state, scenario) = fresh_flight(&config, 0);
        Ok(Self {
            integrator: FlightIntegrator::from_config(&config),
            detector: CollisionDetector::from_config(&config),
            clock: SimulationClock::default(),
            progress: MissionProgress::default(),
            config,
            state,
            scenario,
        })
    }

    /// Replace the generated course, e.g. with one loaded from disk.
    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &DroneState {
        &self.state
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn progress(&self) -> &MissionProgress {
        &self.progress
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed_seconds()
    }

    pub fn is_finished(&self) -> bool {
        self.progress.status != MissionStatus::InProgress
    }

    pub fn telemetry(&self) -> HudTelemetry {
        HudTelemetry::from_state(&self.state, &self.config.world)
    }

    pub fn tick(&mut self, controls: ControlAxes, dt: f64) -> TickReport {
        let controls = condition_controls(
            controls,
            self.state.crashed,
            &self.config.toggles,
            &self.config.profile,
        );
        let was_crashed = self.state.crashed;
        self.clock.advance_by(dt);
        self.integrator.advance(&mut self.state, controls, dt);

        let mut crash = (!was_crashed && self.state.crashed).then_some(CrashCause::Ground);

        let outcome = self
            .detector
            .resolve(&mut self.state, &mut self.scenario, &self.config.toggles);
        crash = crash.or(outcome.crash);
        if outcome.collected.is_some() {
            self.progress.award_target();
        }

        let mut completed = false;
        if !self.is_finished() {
            let status = self.scenario.evaluate(
                &self.state,
                self.clock.elapsed_seconds(),
                &self.config.toggles,
            );
            if let MissionStatus::Failed(cause) = status {
                self.state.crashed = true;
                crash = crash.or(Some(cause));
            }
            completed = self.progress.record_status(status);
        }
        if let Some(cause) = crash {
            self.progress.record_crash(cause);
        }

        TickReport {
            crash,
            collected: outcome.collected,
            completed,
            status: self.progress.status,
        }
    }

    /// Start a new flight: drone, course and clock are replaced together.
    pub fn respawn(&mut self) {
        self.progress.restart();
        let (state, scenario) = fresh_flight(&self.config, self.progress.respawns as u64);
        self.state = state;
        self.scenario = scenario;
        self.clock.reset();
    }

    /// Where a world point appears in the first-person view.
    pub fn project(&self, world_point: &Vector3<f64>) -> Option<ScreenPoint> {
        self.detector
            .projector()
            .project(world_point, &self.state.position, &self.state.rotation)
    }

    /// Uncollected targets in front of the camera, nearest first.
    pub fn visible_targets(&self) -> Vec<(usize, ScreenPoint)> {
        let mut visible: Vec<(usize, ScreenPoint)> = self
            .scenario
            .targets
            .iter()
            .enumerate()
            .filter(|(_, target)| !target.is_collected())
            .filter_map(|(index, target)| self.project(&target.position).map(|p| (index, p)))
            .collect();
        visible.sort_by(|a, b| a.1.depth.total_cmp(&b.1.depth));
        visible
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::collect(&self.state, &self.scenario, &self.progress, &self.clock)
    }
}
