use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// What ended a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Ground,
    /// Index of the obstacle in the active scenario.
    Obstacle(usize),
    BatteryDepleted,
    TimeLimit,
    RangeExceeded,
}

#[derive(Event, Debug, Clone)]
pub struct CrashEvent {
    /// Entity that crashed
    pub entity: Entity,
    pub cause: CrashCause,
}

#[derive(Event, Debug, Clone)]
pub struct TargetCollectedEvent {
    pub entity: Entity,
    /// Index of the target in the active scenario.
    pub target: usize,
    /// Session score after collection
    pub score: u32,
    pub speed_kmh: f64,
}

#[derive(Event, Debug, Clone)]
pub struct MissionCompletedEvent {
    pub entity: Entity,
    pub score: u32,
}
