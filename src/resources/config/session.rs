use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::ControlSource;
use crate::resources::{ConfigError, FeatureToggles, ScenarioPreset};

/// Spawn Y used instead of the configured one when a testing toggle is active.
const SAFE_SPAWN_ALTITUDE: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedPreset {
    /// Professional FPV racing
    Racing,
    /// Recreational flying
    Sport,
    /// High-performance setup
    Custom,
}

impl SpeedPreset {
    pub fn kmh(&self) -> f64 {
        match self {
            SpeedPreset::Racing => 180.0,
            SpeedPreset::Sport => 120.0,
            SpeedPreset::Custom => 200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangePreset {
    Short,
    Medium,
    Long,
}

impl RangePreset {
    pub fn km(&self) -> f64 {
        match self {
            RangePreset::Short => 2.0,
            RangePreset::Medium => 5.0,
            RangePreset::Long => 10.0,
        }
    }
}

/// Per-flight choices made before takeoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub max_speed_kmh: f64,
    pub max_range_km: f64,
    pub spawn_position: Vector3<f64>,
    pub scenario: ScenarioPreset,
    pub control_source: ControlSource,
    /// Mission time limit [s]
    pub time_limit: f64,
    /// Maximum X/Z offset applied to each respawn.
    pub spawn_jitter: f64,
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_speed_kmh: SpeedPreset::Racing.kmh(),
            max_range_km: RangePreset::Medium.km(),
            spawn_position: Vector3::new(100.0, 300.0, 0.0),
            scenario: ScenarioPreset::default(),
            control_source: ControlSource::default(),
            time_limit: 90.0,
            spawn_jitter: 0.0,
            seed: 0,
        }
    }
}

impl SessionConfig {
    pub fn with_speed(mut self, preset: SpeedPreset) -> Self {
        self.max_speed_kmh = preset.kmh();
        self
    }

    pub fn with_range(mut self, preset: RangePreset) -> Self {
        self.max_range_km = preset.km();
        self
    }

    pub fn with_scenario(mut self, scenario: ScenarioPreset) -> Self {
        self.scenario = scenario;
        self
    }

    /// Spawn point for a new flight; testing setups start lower so ground contact comes quickly.
    pub fn spawn_for(&self, toggles: &FeatureToggles) -> Vector3<f64> {
        if toggles.is_testing_mode() {
            Vector3::new(
                self.spawn_position.x,
                SAFE_SPAWN_ALTITUDE,
                self.spawn_position.z,
            )
        } else {
            self.spawn_position
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_speed_kmh.is_finite() && self.max_speed_kmh > 0.0) {
            return Err(ConfigError::Validation(format!(
                "max speed must be positive, got {} km/h",
                self.max_speed_kmh
            )));
        }
        if !(self.max_range_km.is_finite() && self.max_range_km > 0.0) {
            return Err(ConfigError::Validation(format!(
                "max range must be positive, got {} km",
                self.max_range_km
            )));
        }
        if self.spawn_position.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Validation(
                "spawn position must be finite".to_string(),
            ));
        }
        if self.time_limit <= 0.0 || self.spawn_jitter < 0.0 {
            return Err(ConfigError::Validation(
                "time limit must be positive and spawn jitter non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
