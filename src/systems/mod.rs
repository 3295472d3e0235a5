pub mod collisions;
pub mod controller;
pub mod mission;
pub mod physics;

pub use collisions::{collision_detection_system, CollisionDetector, CollisionOutcome};
pub use controller::{condition_controls, emg_control_system, keyboard_axes, keyboard_control_system};
pub use mission::{
    fresh_flight, mission_status_system, record_crash_system, respawn_system,
    simulation_clock_system, telemetry_log_system,
};
pub use physics::{drone_physics_system, FlightIntegrator};
