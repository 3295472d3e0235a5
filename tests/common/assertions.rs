use approx::assert_relative_eq;
use fpv_flyer::components::DroneState;
use nalgebra::Vector3;

/// Assert that a drone state satisfies the flight-model invariants
#[track_caller]
pub fn assert_drone_state_valid(state: &DroneState) {
    assert!(
        state.position.iter().all(|v| v.is_finite()),
        "Position contains non-finite values"
    );
    assert!(
        state.velocity.iter().all(|v| v.is_finite()),
        "Velocity contains non-finite values"
    );
    assert!(
        (0.0..=100.0).contains(&state.battery),
        "Battery {} outside [0, 100]",
        state.battery
    );
    assert!(
        (0.0..360.0).contains(&state.rotation.y),
        "Heading {} not wrapped",
        state.rotation.y
    );
    assert!(
        (-400.0..=1200.0).contains(&state.position.x),
        "X {} outside world bounds",
        state.position.x
    );
    assert!(
        (-400.0..=400.0).contains(&state.position.z),
        "Z {} outside world bounds",
        state.position.z
    );
    assert!(state.total_distance_traveled >= 0.0, "Negative distance");
}

/// Assert that two positions are approximately equal
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
