use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::apply_deadzone;

/// The four normalised control axes, whatever produced them.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ControlAxes {
    /// Lift demand in [0, 1]
    pub throttle: f64,
    /// Rudder in [-1, 1]
    pub yaw: f64,
    /// Nose up positive, in [-1, 1]
    pub pitch: f64,
    /// Right bank positive, in [-1, 1]
    pub roll: f64,
}

impl ControlAxes {
    /// Build a clamped set of axes; NaN collapses to neutral.
    pub fn new(throttle: f64, yaw: f64, pitch: f64, roll: f64) -> Self {
        Self {
            throttle,
            yaw,
            pitch,
            roll,
        }
        .clamped()
    }

    pub fn neutral() -> Self {
        Self::default()
    }

    /// Silently clamp each axis into its domain.
    pub fn clamped(&self) -> Self {
        fn clamp_or_zero(value: f64, min: f64, max: f64) -> f64 {
            if value.is_nan() {
                0.0
            } else {
                value.clamp(min, max)
            }
        }
        Self {
            throttle: clamp_or_zero(self.throttle, 0.0, 1.0),
            yaw: clamp_or_zero(self.yaw, -1.0, 1.0),
            pitch: clamp_or_zero(self.pitch, -1.0, 1.0),
            roll: clamp_or_zero(self.roll, -1.0, 1.0),
        }
    }

    /// Apply a deadzone to every axis and stretch the remainder back to full travel.
    pub fn with_deadzone(&self, deadzone: f64) -> Self {
        Self {
            throttle: apply_deadzone(self.throttle, deadzone),
            yaw: apply_deadzone(self.yaw, deadzone),
            pitch: apply_deadzone(self.pitch, deadzone),
            roll: apply_deadzone(self.roll, deadzone),
        }
    }

    /// Mean absolute deflection across all four axes, in [0, 1].
    pub fn mean_activity(&self) -> f64 {
        (self.throttle.abs() + self.yaw.abs() + self.pitch.abs() + self.roll.abs()) / 4.0
    }
}
