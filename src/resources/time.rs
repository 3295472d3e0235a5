use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::REFERENCE_TICK_RATE;

/// Simulated time, advanced once per physics tick.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationClock {
    /// Seconds per tick
    pub timestep: f64,
    elapsed: f64,
    ticks: u64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(1.0 / REFERENCE_TICK_RATE)
    }
}

impl SimulationClock {
    pub fn new(timestep: f64) -> Self {
        Self {
            timestep,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    pub fn advance(&mut self) {
        self.advance_by(self.timestep);
    }

    pub fn advance_by(&mut self, dt: f64) {
        self.elapsed += dt.max(0.0);
        self.ticks += 1;
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.ticks = 0;
    }
}
