mod emg;
mod keyboard;

pub use emg::emg_control_system;
pub use keyboard::{keyboard_axes, keyboard_control_system};

use crate::components::ControlAxes;
use crate::resources::{FeatureToggles, FlightProfile};

/// Final shaping applied to raw axes from any source before the integrator sees them.
///
/// Axes are clamped and passed through the deadzone. Throttle is cut once the
/// drone is down and held at full when auto throttle is on.
pub fn condition_controls(
    raw: ControlAxes,
    crashed: bool,
    toggles: &FeatureToggles,
    profile: &FlightProfile,
) -> ControlAxes {
    let mut axes = raw.clamped().with_deadzone(profile.deadzone);
    if crashed {
        axes.throttle = 0.0;
    } else if toggles.auto_throttle {
        axes.throttle = 1.0;
    }
    axes
}
