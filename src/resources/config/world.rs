use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::resources::ConfigError;

/// Fixed geometry of the flying area. World +Y points down, toward the ground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// World Y of the visible ground plane.
    pub ground_level: f64,
    /// World Y at/after which the aircraft is considered grounded.
    pub crash_threshold: f64,
    /// Nominal spawn Y that the flight ceiling is measured from.
    pub starting_altitude: f64,
    /// Height above `starting_altitude` that may be flown before the ceiling pushes back.
    pub flight_ceiling: f64,
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            ground_level: 600.0,
            crash_threshold: 590.0,
            starting_altitude: 300.0,
            flight_ceiling: 500.0,
            min_x: -400.0,
            max_x: 1200.0,
            min_z: -400.0,
            max_z: 400.0,
        }
    }
}

impl WorldConfig {
    /// World Y of the soft flight ceiling.
    pub fn ceiling_y(&self) -> f64 {
        self.starting_altitude - self.flight_ceiling
    }

    /// Altitude above ground for a world Y coordinate, never negative.
    pub fn altitude_from_world_y(&self, world_y: f64) -> f64 {
        (self.ground_level - world_y).max(0.0)
    }

    pub fn world_y_from_altitude(&self, altitude: f64) -> f64 {
        self.ground_level - altitude
    }

    /// Clamp X and Z into the flying area; Y is left to ground/ceiling handling.
    pub fn clamp_horizontal(&self, position: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            position.x.clamp(self.min_x, self.max_x),
            position.y,
            position.z.clamp(self.min_z, self.max_z),
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.crash_threshold > self.ground_level {
            return Err(ConfigError::Validation(format!(
                "crash threshold {} lies below the ground plane {}",
                self.crash_threshold, self.ground_level
            )));
        }
        if self.min_x >= self.max_x || self.min_z >= self.max_z {
            return Err(ConfigError::Validation(
                "world bounds are empty".to_string(),
            ));
        }
        if self.flight_ceiling <= 0.0 {
            return Err(ConfigError::Validation(
                "flight ceiling must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
