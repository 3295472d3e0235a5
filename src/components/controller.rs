use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Marks the drone flown by the local pilot.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub active: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }
}

/// Where the control axes of the player drone come from.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ControlSource {
    #[default]
    Keyboard,
    Emg,
    /// Axes written by another system, e.g. a scripted autopilot.
    External,
}
