use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{wrap_degrees, DRONE_SIZE, FULL_BATTERY, METERS_PER_KM, MS_TO_KMH};

/// Speed and range envelope chosen for a flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroneLimits {
    /// Nominal speed cap [m/s]
    pub max_speed_ms: f64,
    /// Distance from the start point before pushback begins [m]
    pub max_range_m: f64,
}

impl DroneLimits {
    pub fn new(max_speed_kmh: f64, max_range_km: f64) -> Self {
        Self {
            max_speed_ms: max_speed_kmh / MS_TO_KMH,
            max_range_m: max_range_km * METERS_PER_KM,
        }
    }

    pub fn max_speed_kmh(&self) -> f64 {
        self.max_speed_ms * MS_TO_KMH
    }

    pub fn max_range_km(&self) -> f64 {
        self.max_range_m / METERS_PER_KM
    }
}

impl Default for DroneLimits {
    fn default() -> Self {
        Self::new(180.0, 5.0)
    }
}

/// Complete state of the simulated multi-rotor.
///
/// Only the flight integrator mutates this during flight; a reset replaces the
/// whole value rather than editing fields.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneState {
    /// World position, +Y is down.
    pub position: Vector3<f64>,
    /// World-frame velocity per reference tick.
    pub velocity: Vector3<f64>,
    /// x = pitch, y = heading in [0, 360), z = roll [deg]
    pub rotation: Vector3<f64>,
    /// Remaining charge [%]
    pub battery: f64,
    /// Absorbing: once set, the integrator leaves the state untouched.
    pub crashed: bool,
    pub start_position: Vector3<f64>,
    /// Highest speed seen this flight [km/h]
    pub max_speed_achieved: f64,
    /// Path length flown this flight [world units]
    pub total_distance_traveled: f64,
    pub limits: DroneLimits,
    /// Airframe bounding size [world units]
    pub size: f64,
}

impl Default for DroneState {
    fn default() -> Self {
        Self::new(Vector3::new(0.0, 300.0, 0.0), DroneLimits::default())
    }
}

impl DroneState {
    pub fn new(spawn: Vector3<f64>, limits: DroneLimits) -> Self {
        Self {
            position: spawn,
            velocity: Vector3::zeros(),
            rotation: Vector3::zeros(),
            battery: FULL_BATTERY,
            crashed: false,
            start_position: spawn,
            max_speed_achieved: 0.0,
            total_distance_traveled: 0.0,
            limits,
            size: DRONE_SIZE,
        }
    }

    /// Spawn with limits given in km/h and km.
    pub fn spawn(spawn: Vector3<f64>, max_speed_kmh: f64, max_range_km: f64) -> Self {
        Self::new(spawn, DroneLimits::new(max_speed_kmh, max_range_km))
    }

    pub fn speed_ms(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_ms() * MS_TO_KMH
    }

    pub fn range_from_start_m(&self) -> f64 {
        (self.position - self.start_position).norm()
    }

    pub fn range_from_start_km(&self) -> f64 {
        self.range_from_start_m() / METERS_PER_KM
    }

    /// Range used as a percentage of the configured maximum.
    pub fn range_percent(&self) -> f64 {
        if self.limits.max_range_m > 0.0 {
            self.range_from_start_m() / self.limits.max_range_m * 100.0
        } else {
            0.0
        }
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_traveled / METERS_PER_KM
    }

    pub fn pitch(&self) -> f64 {
        self.rotation.x
    }

    pub fn heading(&self) -> f64 {
        wrap_degrees(self.rotation.y)
    }

    pub fn roll(&self) -> f64 {
        self.rotation.z
    }

    /// Collision radius of the airframe.
    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }
}
