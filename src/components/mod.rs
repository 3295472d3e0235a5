pub mod collision;
pub mod controller;
pub mod drone;
pub mod scenario;

pub use collision::{CrashCause, CrashEvent, MissionCompletedEvent, TargetCollectedEvent};
pub use controller::{ControlSource, PlayerController};
pub use drone::{ControlAxes, DroneLimits, DroneState, FlightMode, HudTelemetry};
pub use scenario::{Obstacle, Target, TargetKind};
