use fpv_flyer::components::DroneState;
use nalgebra::Vector3;

pub const TEST_DT: f64 = 1.0 / 60.0;

/// Drone at the default spawn point with the racing/medium envelope
pub fn create_spawn_state() -> DroneState {
    DroneState::spawn(Vector3::new(100.0, 300.0, 0.0), 180.0, 5.0)
}

/// Drone resting on the crash threshold
pub fn create_grounded_state() -> DroneState {
    let mut state = create_spawn_state();
    state.position.y = 590.0;
    state
}
