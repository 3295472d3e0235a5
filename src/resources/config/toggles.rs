use serde::{Deserialize, Serialize};

/// Switches for individual simulation effects. Each one is checked at the point
/// where its effect is applied, never by skipping a whole tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureToggles {
    /// Clamp the aircraft onto the crash threshold when it reaches the ground.
    pub ground_clamp: bool,
    /// Mark the aircraft crashed when it reaches the ground.
    pub ground_collision: bool,
    pub obstacle_collision: bool,
    pub range_limit: bool,
    pub battery_drain: bool,
    /// Populate scenarios with targets.
    pub targets: bool,
    /// Hold full throttle while the aircraft is flying (debug aid).
    pub auto_throttle: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            ground_clamp: true,
            ground_collision: true,
            obstacle_collision: true,
            range_limit: true,
            battery_drain: true,
            targets: true,
            auto_throttle: false,
        }
    }
}

impl FeatureToggles {
    /// Obstacle-free setup used for EMG studies: only ground contact ends a flight.
    pub fn research() -> Self {
        Self {
            obstacle_collision: false,
            ..Default::default()
        }
    }

    /// Everything that can end a flight early is switched off.
    pub fn sandbox() -> Self {
        Self {
            ground_collision: false,
            obstacle_collision: false,
            range_limit: false,
            battery_drain: false,
            ..Default::default()
        }
    }

    /// True when any crash source is disabled, i.e. the session is not a real run.
    pub fn is_testing_mode(&self) -> bool {
        !self.ground_collision || !self.obstacle_collision
    }
}
