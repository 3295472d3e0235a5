use nalgebra::Vector3;
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Wrap an angle in degrees into [0, 360), never leaving a negative residue.
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = ((angle % 360.0) + 360.0) % 360.0;
    // (-1e-14 % 360) + 360 rounds to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Unit vector along a heading in the horizontal (X/Z) plane.
#[inline]
pub fn heading_vector(heading_deg: f64) -> Vector3<f64> {
    let heading = deg_to_rad(heading_deg);
    Vector3::new(heading.sin(), 0.0, heading.cos())
}

/// Horizontal unit vector perpendicular to the heading, pointing to starboard.
#[inline]
pub fn starboard_vector(heading_deg: f64) -> Vector3<f64> {
    let heading = deg_to_rad(heading_deg);
    Vector3::new(heading.cos(), 0.0, -heading.sin())
}

/// Normalise a vector, returning `None` for a zero-length input.
pub fn try_normalize(v: &Vector3<f64>) -> Option<Vector3<f64>> {
    let magnitude = v.norm();
    if magnitude > 0.0 {
        Some(v / magnitude)
    } else {
        None
    }
}

/// Apply a deadzone and renormalise the remaining travel back onto [-1, 1].
pub fn apply_deadzone(value: f64, deadzone: f64) -> f64 {
    if value.abs() < deadzone {
        return 0.0;
    }
    let normalized = (value.abs() - deadzone) / (1.0 - deadzone);
    value.signum() * normalized.clamp(0.0, 1.0)
}
