use bevy::prelude::*;
use chrono::{DateTime, Utc};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::components::{CrashCause, DroneState, Obstacle, Target};
use crate::resources::FeatureToggles;
use crate::utils::{RANGE_FAILURE_PERCENT, TARGET_SCORE};

/// Built-in research courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScenarioPreset {
    /// Four targets along the course at gentle altitudes.
    #[default]
    Basic,
    /// Markers alternating between high and low altitude.
    Altitude,
    /// Small checkpoints with lateral offsets.
    Precision,
    /// Long course ending in a final checkpoint.
    Endurance,
    /// Gates weaving between ground pillars.
    Slalom,
}

impl ScenarioPreset {
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioPreset::Basic => "basic",
            ScenarioPreset::Altitude => "altitude",
            ScenarioPreset::Precision => "precision",
            ScenarioPreset::Endurance => "endurance",
            ScenarioPreset::Slalom => "slalom",
        }
    }

    fn targets(&self) -> Vec<Target> {
        match self {
            ScenarioPreset::Basic => vec![
                Target::checkpoint(200.0, 250.0, 0.0, 25.0),
                Target::waypoint(400.0, 200.0, 50.0, 25.0),
                Target::checkpoint(600.0, 250.0, -30.0, 25.0),
                Target::waypoint(800.0, 200.0, 20.0, 25.0),
            ],
            ScenarioPreset::Altitude => [200.0, 350.0, 150.0, 300.0]
                .iter()
                .enumerate()
                .map(|(i, y)| Target::marker(200.0 * (i + 1) as f64, *y, 0.0, 20.0))
                .collect(),
            ScenarioPreset::Precision => [
                (150.0, 250.0, 20.0),
                (350.0, 200.0, -20.0),
                (550.0, 280.0, 30.0),
                (750.0, 220.0, -10.0),
                (900.0, 260.0, 25.0),
            ]
            .iter()
            .map(|(x, y, z)| Target::checkpoint(*x, *y, *z, 15.0))
            .collect(),
            ScenarioPreset::Endurance => {
                let mut targets: Vec<Target> = [
                    (150.0, 250.0, 0.0),
                    (300.0, 200.0, 40.0),
                    (450.0, 280.0, -30.0),
                    (600.0, 220.0, 50.0),
                    (750.0, 260.0, -20.0),
                    (900.0, 200.0, 30.0),
                ]
                .iter()
                .map(|(x, y, z)| Target::waypoint(*x, *y, *z, 25.0))
                .collect();
                targets.push(Target::checkpoint(1050.0, 250.0, 0.0, 25.0));
                targets
            }
            ScenarioPreset::Slalom => vec![
                Target::checkpoint(300.0, 300.0, 50.0, 25.0),
                Target::checkpoint(500.0, 300.0, -50.0, 25.0),
                Target::checkpoint(700.0, 300.0, 50.0, 25.0),
                Target::waypoint(900.0, 250.0, 0.0, 25.0),
            ],
        }
    }

    /// Pillars standing on the ground plane; only the slalom course has any.
    fn obstacles(&self) -> Vec<Obstacle> {
        match self {
            ScenarioPreset::Slalom => [(300.0, -50.0), (500.0, 50.0), (700.0, -50.0)]
                .iter()
                .map(|(x, z)| Obstacle::new(Vector3::new(*x, 350.0, *z), 40.0, 500.0, 40.0))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Where a mission stands after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionStatus {
    InProgress,
    Completed,
    Failed(CrashCause),
}

/// The course being flown: obstacles to avoid and targets to collect, in order.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub obstacles: Vec<Obstacle>,
    pub targets: Vec<Target>,
    /// Seconds allowed to collect every target.
    pub time_limit: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::from_preset(ScenarioPreset::default(), &FeatureToggles::default(), 90.0)
    }
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        obstacles: Vec<Obstacle>,
        targets: Vec<Target>,
        time_limit: f64,
    ) -> Self {
        Self {
            name: name.into(),
            obstacles,
            targets,
            time_limit,
        }
    }

    /// Fresh course for `preset`; the target list is empty when targets are toggled off.
    pub fn from_preset(preset: ScenarioPreset, toggles: &FeatureToggles, time_limit: f64) -> Self {
        let targets = if toggles.targets {
            preset.targets()
        } else {
            Vec::new()
        };
        Self::new(preset.name(), preset.obstacles(), targets, time_limit)
    }

    pub fn collected_count(&self) -> usize {
        self.targets.iter().filter(|t| t.is_collected()).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.targets.len() - self.collected_count()
    }

    /// First target still to be collected, used for guidance.
    pub fn next_target(&self) -> Option<(usize, &Target)> {
        self.targets
            .iter()
            .enumerate()
            .find(|(_, target)| !target.is_collected())
    }

    /// Mission rules: failures are checked before completion, and a course without
    /// targets never completes.
    pub fn evaluate(
        &self,
        state: &DroneState,
        elapsed: f64,
        toggles: &FeatureToggles,
    ) -> MissionStatus {
        if let Some(cause) = self.failure(state, elapsed, toggles) {
            return MissionStatus::Failed(cause);
        }
        if !state.crashed && !self.targets.is_empty() && self.remaining_count() == 0 {
            return MissionStatus::Completed;
        }
        MissionStatus::InProgress
    }

    fn failure(
        &self,
        state: &DroneState,
        elapsed: f64,
        toggles: &FeatureToggles,
    ) -> Option<CrashCause> {
        if state.crashed {
            return None;
        }
        if elapsed > self.time_limit {
            Some(CrashCause::TimeLimit)
        } else if toggles.battery_drain && state.battery <= 0.0 {
            Some(CrashCause::BatteryDepleted)
        } else if toggles.range_limit && state.range_percent() > RANGE_FAILURE_PERCENT {
            Some(CrashCause::RangeExceeded)
        } else {
            None
        }
    }
}

/// How the current session is going, reset on every respawn except the id and counters.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MissionProgress {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub score: u32,
    pub status: MissionStatus,
    pub crash: Option<CrashCause>,
    pub respawns: u32,
}

impl Default for MissionProgress {
    fn default() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            score: 0,
            status: MissionStatus::InProgress,
            crash: None,
            respawns: 0,
        }
    }
}

impl MissionProgress {
    /// Returns the new score.
    pub fn award_target(&mut self) -> u32 {
        self.score += TARGET_SCORE;
        self.score
    }

    /// Record the first crash of the flight. Returns false if one was already recorded.
    pub fn record_crash(&mut self, cause: CrashCause) -> bool {
        if self.crash.is_some() {
            return false;
        }
        self.crash = Some(cause);
        self.status = MissionStatus::Failed(cause);
        true
    }

    /// Returns true only on the tick the mission becomes complete.
    pub fn record_status(&mut self, status: MissionStatus) -> bool {
        match status {
            MissionStatus::Failed(cause) => {
                self.record_crash(cause);
                false
            }
            MissionStatus::Completed if self.status == MissionStatus::InProgress => {
                self.status = MissionStatus::Completed;
                true
            }
            _ => false,
        }
    }

    pub fn restart(&mut self) {
        self.score = 0;
        self.status = MissionStatus::InProgress;
        self.crash = None;
        self.respawns += 1;
    }
}
