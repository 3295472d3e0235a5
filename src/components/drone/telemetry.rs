use serde::{Deserialize, Serialize};

use crate::components::DroneState;
use crate::resources::WorldConfig;
use crate::utils::LOW_BATTERY_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightMode {
    Armed,
    LowBattery,
    Crashed,
}

impl FlightMode {
    pub fn label(&self) -> &'static str {
        match self {
            FlightMode::Armed => "ARMED",
            FlightMode::LowBattery => "LOW BATT",
            FlightMode::Crashed => "CRASH",
        }
    }
}

/// Scalars the HUD draws, all derived from a state snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudTelemetry {
    pub speed_kmh: f64,
    pub altitude: f64,
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
    pub battery: f64,
    pub range_km: f64,
    pub range_percent: f64,
    pub total_distance_km: f64,
    pub max_speed_kmh: f64,
    pub mode: FlightMode,
}

impl HudTelemetry {
    pub fn from_state(state: &DroneState, world: &WorldConfig) -> Self {
        let mode = if state.crashed {
            FlightMode::Crashed
        } else if state.battery < LOW_BATTERY_THRESHOLD {
            FlightMode::LowBattery
        } else {
            FlightMode::Armed
        };

        Self {
            speed_kmh: state.speed_kmh(),
            altitude: world.altitude_from_world_y(state.position.y),
            heading: state.heading(),
            pitch: state.pitch(),
            roll: state.roll(),
            battery: state.battery,
            range_km: state.range_from_start_km(),
            range_percent: state.range_percent(),
            total_distance_km: state.total_distance_km(),
            max_speed_kmh: state.max_speed_achieved,
            mode,
        }
    }
}
