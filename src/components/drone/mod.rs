mod controls;
mod state;
mod telemetry;

pub use controls::ControlAxes;
pub use state::{DroneLimits, DroneState};
pub use telemetry::{FlightMode, HudTelemetry};
